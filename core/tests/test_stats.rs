// core/tests/test_stats.rs
use fuelmetrics_core::stats::{
    correlation_matrix, one_way_anova, pairwise_welch, pearson, summarize,
};

#[test]
fn summarize_basic() {
    let s = summarize(&[2.0, 4.0, 6.0]);
    assert_eq!(s.n, 3);
    assert!((s.mean - 4.0).abs() < 1e-12);
    assert!((s.std - 2.0).abs() < 1e-12); // utvalgs-std
}

#[test]
fn anova_identical_groups_gives_f_zero_p_one() {
    let groups = vec![vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0], vec![1.0, 2.0, 3.0]];
    let r = one_way_anova(&groups).unwrap();
    assert!(r.f_stat.abs() < 1e-12);
    assert!((r.p_value - 1.0).abs() < 1e-9);
}

#[test]
fn anova_matches_hand_computed_example() {
    // Midler 2, 3, 4; SSB = 6, SSW = 6, df = (2, 6) => F = 3.0
    let groups = vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 3.0, 4.0],
        vec![3.0, 4.0, 5.0],
    ];
    let r = one_way_anova(&groups).unwrap();
    assert!((r.f_stat - 3.0).abs() < 1e-9, "F = {}", r.f_stat);
    assert!((r.df_between - 2.0).abs() < 1e-12);
    assert!((r.df_within - 6.0).abs() < 1e-12);
    // F(2,6)=3.0 => p ≈ 0.125
    assert!(r.p_value > 0.10 && r.p_value < 0.15, "p = {}", r.p_value);
}

#[test]
fn anova_rejects_degenerate_input() {
    assert!(one_way_anova(&[vec![1.0, 2.0]]).is_err());
    assert!(one_way_anova(&[vec![1.0], vec![2.0]]).is_err());
}

#[test]
fn pairwise_welch_corrects_over_six_pairs_for_four_groups() {
    let groups: Vec<(String, Vec<f64>)> = [
        ("Strength", vec![5.0, 6.0, 7.0, 8.0]),
        ("HIIT", vec![6.0, 7.0, 8.0, 9.0]),
        ("Cardio", vec![4.0, 5.0, 6.0, 7.0]),
        ("Yoga", vec![3.0, 4.0, 5.0, 6.0]),
    ]
    .into_iter()
    .map(|(n, v)| (n.to_string(), v))
    .collect();

    let comparisons = pairwise_welch(&groups).unwrap();
    assert_eq!(comparisons.len(), 6);
    for c in &comparisons {
        let expected = (c.p_raw * 6.0).min(1.0);
        assert!(
            (c.p_adjusted - expected).abs() < 1e-12,
            "{} vs {}: adjusted {} raw {}",
            c.a,
            c.b,
            c.p_adjusted,
            c.p_raw
        );
        assert!(c.p_adjusted >= c.p_raw);
    }
}

#[test]
fn pairwise_welch_identical_groups_is_insignificant() {
    let groups = vec![
        ("a".to_string(), vec![1.0, 2.0, 3.0]),
        ("b".to_string(), vec![1.0, 2.0, 3.0]),
    ];
    let comparisons = pairwise_welch(&groups).unwrap();
    assert_eq!(comparisons.len(), 1);
    assert!(comparisons[0].t_stat.abs() < 1e-12);
    assert!((comparisons[0].p_adjusted - 1.0).abs() < 1e-9);
}

#[test]
fn pearson_exact_linear_relation() {
    let xs = [1.0, 2.0, 3.0, 4.0];
    let up: Vec<f64> = xs.iter().map(|x| 3.0 * x + 1.0).collect();
    let down: Vec<f64> = xs.iter().map(|x| -2.0 * x + 5.0).collect();

    assert!((pearson(&xs, &up).unwrap() - 1.0).abs() < 1e-12);
    assert!((pearson(&xs, &down).unwrap() + 1.0).abs() < 1e-12);
}

#[test]
fn pearson_undefined_for_constant_or_short_input() {
    assert!(pearson(&[1.0, 1.0, 1.0], &[1.0, 2.0, 3.0]).is_none());
    assert!(pearson(&[1.0], &[2.0]).is_none());
    assert!(pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]).is_none());
}

#[test]
fn correlation_matrix_uses_pairwise_complete_rows() {
    let columns = vec![
        (
            "x".to_string(),
            vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)],
        ),
        (
            "y".to_string(),
            // Raden med None utelates for dette paret; resten er eksakt lineær
            vec![Some(2.0), None, Some(6.0), Some(8.0)],
        ),
    ];
    let m = correlation_matrix(&columns);
    assert_eq!(m.labels, vec!["x", "y"]);
    assert!((m.values[0][0] - 1.0).abs() < 1e-12);
    assert!((m.values[0][1] - 1.0).abs() < 1e-12);
    assert!((m.values[1][0] - m.values[0][1]).abs() < 1e-12);
}
