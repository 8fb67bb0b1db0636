use super::*;
use crate::ChartError;
use crate::scale::DegeneratePolicy;
use crate::test_fixtures::{day, obs, series, two_region_dataset};

#[test]
fn one_panel_per_series_in_dataset_order() {
    let mut dataset = two_region_dataset();
    dataset.series.reverse();
    let grid = derive_grid(&dataset, &ChartOptions::default());

    let ids: Vec<&str> = grid.panels().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["NY", "CA"]);
}

#[test]
fn malformed_band_is_omitted_while_siblings_render() {
    let mut dataset = two_region_dataset();
    dataset
        .series
        .insert(1, series("BAD", vec![obs(3, 3.0, 5.0, 2.0)]));
    let grid = derive_grid(&dataset, &ChartOptions::default());

    assert_eq!(grid.len(), 3);
    assert!(grid.outcomes[0].panel().is_some());
    assert!(grid.outcomes[2].panel().is_some());
    match &grid.outcomes[1] {
        PanelOutcome::Omitted { id, label, error } => {
            assert_eq!(id, "BAD");
            assert_eq!(label, "Region BAD");
            assert!(matches!(error, ChartError::InvalidBand { index: 0, .. }));
        }
        PanelOutcome::Rendered(_) => panic!("malformed band should be omitted"),
    }
}

#[test]
fn malformed_band_does_not_stretch_shared_extents() {
    let mut dataset = two_region_dataset();
    dataset
        .series
        .push(series("BAD", vec![obs(9, 50.0, 100.0, 40.0)]));
    let grid = derive_grid(&dataset, &ChartOptions::default());

    assert!(matches!(
        &grid.outcomes[2],
        PanelOutcome::Omitted { error: ChartError::InvalidBand { index: 0, .. }, .. }
    ));
    for panel in grid.panels() {
        assert_eq!(panel.x_scale.domain(), (day(2), day(4)));
        assert_eq!(panel.y_scale.domain(), (0.5, 2.5));
    }
}

#[test]
fn invalid_series_do_not_affect_shared_extents() {
    let mut dataset = two_region_dataset();
    dataset.series.push(series("EMPTY", vec![]));
    dataset.series.push(series(
        "UNSORTED",
        vec![obs(9, 50.0, 40.0, 60.0), obs(1, 50.0, 40.0, 60.0)],
    ));
    let grid = derive_grid(&dataset, &ChartOptions::default());

    assert!(matches!(
        &grid.outcomes[2],
        PanelOutcome::Omitted { error: ChartError::EmptySeries(_), .. }
    ));
    assert!(matches!(
        &grid.outcomes[3],
        PanelOutcome::Omitted { error: ChartError::UnsortedSeries { index: 1, .. }, .. }
    ));

    let panel = grid.panels().next().unwrap();
    assert_eq!(panel.x_scale.domain(), (day(2), day(4)));
    assert_eq!(panel.y_scale.domain(), (0.5, 2.5));
}

#[test]
fn shared_y_is_identical_across_panels() {
    let grid = derive_grid(&two_region_dataset(), &ChartOptions::default());
    let domains: Vec<(f64, f64)> = grid.panels().map(|p| p.y_scale.domain()).collect();
    assert_eq!(domains[0], domains[1]);
}

#[test]
fn independent_y_differs_per_panel() {
    let options = ChartOptions::default().with_y_domain(YDomainPolicy::Independent);
    let grid = derive_grid(&two_region_dataset(), &options);
    let domains: Vec<(f64, f64)> = grid.panels().map(|p| p.y_scale.domain()).collect();
    assert_ne!(domains[0], domains[1]);
}

#[test]
fn independent_x_follows_each_series() {
    let mut dataset = two_region_dataset();
    dataset.series[1].observations.push(obs(8, 1.0, 0.8, 1.2));
    let options = ChartOptions::default().with_x_domain(XDomainPolicy::Independent);
    let grid = derive_grid(&dataset, &options);

    let domains: Vec<_> = grid.panels().map(|p| p.x_scale.domain()).collect();
    assert_eq!(domains, vec![(day(2), day(4)), (day(2), day(8))]);
}

#[test]
fn degenerate_domain_respects_policy() {
    let dataset = Dataset::new(vec![series("ONE", vec![obs(2, 1.0, 0.5, 1.5)])]);

    let grid = derive_grid(&dataset, &ChartOptions::default());
    assert!(matches!(
        &grid.outcomes[0],
        PanelOutcome::Omitted { error: ChartError::Domain(_), .. }
    ));

    let options = ChartOptions::default().with_degenerate(DegeneratePolicy::Constant);
    let grid = derive_grid(&dataset, &options);
    assert_eq!(grid.panels().count(), 1);
}

#[test]
fn render_is_memoized_on_dataset_and_options() {
    let dataset = two_region_dataset();
    let mut chart = SmallMultiples::new(ChartOptions::default());

    assert_eq!(chart.render(&dataset).unwrap().len(), 2);
    chart.render(&dataset).unwrap();
    chart.render(&dataset.clone()).unwrap();
    assert_eq!(chart.recompute_count(), 1);

    let mut changed = dataset.clone();
    changed.series[0].observations[0].central = 1.3;
    chart.render(&changed).unwrap();
    assert_eq!(chart.recompute_count(), 2);

    chart.set_options(ChartOptions::default());
    chart.render(&changed).unwrap();
    assert_eq!(chart.recompute_count(), 2);

    chart.set_options(ChartOptions::default().with_y_domain(YDomainPolicy::Independent));
    chart.render(&changed).unwrap();
    assert_eq!(chart.recompute_count(), 3);
    assert_eq!(chart.options().y_domain, YDomainPolicy::Independent);
}
