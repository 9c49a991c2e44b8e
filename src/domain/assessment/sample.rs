//! Sample assessment: four experts rating four alternatives on five criteria.

use super::Assessment;
use crate::domain::foundation::{ImportanceTerm, PerformanceTerm};

use crate::domain::foundation::ImportanceTerm::{High as H, Low as L, Medium as M, MediumHigh as MH};
use crate::domain::foundation::PerformanceTerm::{
    Fair as F, Good as G, MediumGood as MG, MediumPoor as MP, VeryGood as VG,
};

/// Importance rows, one per expert.
const SAMPLE_WEIGHTS: [[ImportanceTerm; 5]; 4] = [
    [M, MH, H, M, L],
    [MH, M, H, MH, M],
    [M, M, H, M, L],
    [H, MH, MH, M, M],
];

/// Performance rows, one per alternative. Every expert submits the same rows.
const SAMPLE_PERFORMANCE: [[PerformanceTerm; 5]; 4] = [
    [F, MG, G, MP, F],
    [MG, G, G, MG, F],
    [MP, F, MG, MP, MP],
    [G, G, VG, G, MG],
];

impl Assessment {
    /// Returns the sample data set. All criteria are benefit criteria.
    pub fn sample() -> Self {
        let mut builder = Assessment::builder().alternatives(4).criteria(5).experts(4);

        for (e, weights) in SAMPLE_WEIGHTS.iter().enumerate() {
            builder = builder.weight_row(e, weights);
            for (a, ratings) in SAMPLE_PERFORMANCE.iter().enumerate() {
                builder = builder.performance_row(e, a, ratings);
            }
        }

        builder.build()
    }
}
