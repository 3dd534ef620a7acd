//! Deskriptiv statistikk, enveis ANOVA, post-hoc og korrelasjon.
//! Enkle enkeltpass-formler; fordelingsfunksjonene kommer fra statrs.

use statrs::distribution::{ContinuousCDF, FisherSnedecor, StudentsT};

use crate::error::FuelError;

#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub n: usize,
    pub mean: f64,
    pub std: f64, // utvalgs-std (n-1)
}

pub fn summarize(values: &[f64]) -> Summary {
    let n = values.len();
    if n == 0 {
        return Summary {
            n: 0,
            mean: f64::NAN,
            std: f64::NAN,
        };
    }
    let mean = values.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
        (ss / (n - 1) as f64).sqrt()
    } else {
        f64::NAN
    };
    Summary { n, mean, std }
}

#[derive(Debug, Clone, Copy)]
pub struct AnovaResult {
    pub f_stat: f64,
    pub p_value: f64,
    pub df_between: f64,
    pub df_within: f64,
}

/// Enveis ANOVA over k grupper.
/// Kanter: identiske gruppemidler gir F=0 og p=1; null within-varians gir p=0.
pub fn one_way_anova(groups: &[Vec<f64>]) -> Result<AnovaResult, FuelError> {
    let k = groups.len();
    let n_total: usize = groups.iter().map(Vec::len).sum();
    if k < 2 || n_total <= k {
        return Err(FuelError::EmptyTable("one-way ANOVA"));
    }

    let grand_mean = groups.iter().flatten().sum::<f64>() / n_total as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        if group.is_empty() {
            return Err(FuelError::EmptyTable("one-way ANOVA (empty group)"));
        }
        let mean = group.iter().sum::<f64>() / group.len() as f64;
        ss_between += group.len() as f64 * (mean - grand_mean).powi(2);
        ss_within += group.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    }

    let df_between = (k - 1) as f64;
    let df_within = (n_total - k) as f64;

    if ss_within == 0.0 {
        // Degenerert: all varians ligger mellom gruppene
        let (f_stat, p_value) = if ss_between == 0.0 {
            (0.0, 1.0)
        } else {
            (f64::INFINITY, 0.0)
        };
        return Ok(AnovaResult {
            f_stat,
            p_value,
            df_between,
            df_within,
        });
    }

    let f_stat = (ss_between / df_between) / (ss_within / df_within);
    let dist = FisherSnedecor::new(df_between, df_within)
        .map_err(|e| FuelError::Modeling(e.to_string()))?;
    let p_value = 1.0 - dist.cdf(f_stat);

    Ok(AnovaResult {
        f_stat,
        p_value,
        df_between,
        df_within,
    })
}

#[derive(Debug, Clone)]
pub struct PairwiseComparison {
    pub a: String,
    pub b: String,
    pub mean_diff: f64,
    pub t_stat: f64,
    pub p_raw: f64,
    /// Bonferroni-justert over alle par (familywise).
    pub p_adjusted: f64,
}

/// Welch t-test for alle gruppepar, Bonferroni-korrigert.
pub fn pairwise_welch(groups: &[(String, Vec<f64>)]) -> Result<Vec<PairwiseComparison>, FuelError> {
    let m = groups.len() * groups.len().saturating_sub(1) / 2;
    if m == 0 {
        return Err(FuelError::EmptyTable("pairwise comparison"));
    }

    let mut comparisons = Vec::with_capacity(m);
    for i in 0..groups.len() {
        for j in (i + 1)..groups.len() {
            let (name_a, a) = &groups[i];
            let (name_b, b) = &groups[j];
            if a.len() < 2 || b.len() < 2 {
                return Err(FuelError::EmptyTable("pairwise comparison (group too small)"));
            }

            let sa = summarize(a);
            let sb = summarize(b);
            let va_n = sa.std.powi(2) / sa.n as f64;
            let vb_n = sb.std.powi(2) / sb.n as f64;
            let se = (va_n + vb_n).sqrt();
            let mean_diff = sa.mean - sb.mean;

            let (t_stat, p_raw) = if se == 0.0 {
                if mean_diff == 0.0 {
                    (0.0, 1.0)
                } else {
                    (f64::INFINITY * mean_diff.signum(), 0.0)
                }
            } else {
                let t = mean_diff / se;
                // Welch-Satterthwaite frihetsgrader
                let df = (va_n + vb_n).powi(2)
                    / (va_n.powi(2) / (sa.n as f64 - 1.0) + vb_n.powi(2) / (sb.n as f64 - 1.0));
                let dist = StudentsT::new(0.0, 1.0, df)
                    .map_err(|e| FuelError::Modeling(e.to_string()))?;
                (t, 2.0 * (1.0 - dist.cdf(t.abs())))
            };

            comparisons.push(PairwiseComparison {
                a: name_a.clone(),
                b: name_b.clone(),
                mean_diff,
                t_stat,
                p_raw,
                p_adjusted: (p_raw * m as f64).min(1.0),
            });
        }
    }
    Ok(comparisons)
}

/// Pearson-korrelasjon. None hvis for få punkter eller null varians.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return None;
    }
    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;

    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mx) * (y - my);
        vx += (x - mx).powi(2);
        vy += (y - my).powi(2);
    }
    if vx == 0.0 || vy == 0.0 {
        return None;
    }
    Some(cov / (vx * vy).sqrt())
}

#[derive(Debug, Clone)]
pub struct CorrelationMatrix {
    pub labels: Vec<String>,
    /// values[i][j] = r(kolonne i, kolonne j); NaN der korrelasjon er udefinert.
    pub values: Vec<Vec<f64>>,
}

/// Parvis-komplett korrelasjonsmatrise over Option-kolonner: for hvert par
/// brukes bare rader der begge verdier finnes.
pub fn correlation_matrix(columns: &[(String, Vec<Option<f64>>)]) -> CorrelationMatrix {
    let labels: Vec<String> = columns.iter().map(|(name, _)| name.clone()).collect();
    let k = columns.len();
    let mut values = vec![vec![f64::NAN; k]; k];

    for i in 0..k {
        values[i][i] = 1.0;
        for j in (i + 1)..k {
            let mut xs = Vec::new();
            let mut ys = Vec::new();
            for (x, y) in columns[i].1.iter().zip(&columns[j].1) {
                if let (Some(x), Some(y)) = (x, y) {
                    xs.push(*x);
                    ys.push(*y);
                }
            }
            let r = pearson(&xs, &ys).unwrap_or(f64::NAN);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix { labels, values }
}
