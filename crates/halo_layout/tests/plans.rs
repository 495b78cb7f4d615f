use halo_layout::{
    resolve_form_factor, resolve_layout, Breakpoints, FormFactor, PlacementContent,
};
use std::collections::HashSet;

const FORM_FACTORS: [FormFactor; 3] = [FormFactor::Mobile, FormFactor::Tablet, FormFactor::Tv];

#[test]
fn every_item_is_placed_exactly_once() {
    for form_factor in FORM_FACTORS {
        for count in 0..50 {
            let plan = resolve_layout(form_factor, count);
            let items: Vec<usize> = plan
                .iter()
                .filter_map(|p| match p.content {
                    PlacementContent::Item(index) => Some(index),
                    PlacementContent::Menu(_) => None,
                })
                .collect();
            assert_eq!(items, (1..=count).collect::<Vec<_>>(), "{form_factor} x {count}");
        }
    }
}

#[test]
fn no_two_placements_share_a_cell() {
    for form_factor in FORM_FACTORS {
        for count in 0..50 {
            let plan = resolve_layout(form_factor, count);
            let mut cells = HashSet::new();
            for placement in plan.iter() {
                assert!(
                    placement.column < plan.columns,
                    "{form_factor} x {count}: column {} out of range",
                    placement.column
                );
                assert!(
                    cells.insert((placement.row, placement.column)),
                    "{form_factor} x {count}: duplicate cell {:?}",
                    (placement.row, placement.column)
                );
            }
        }
    }
}

#[test]
fn tablet_columns_differ_by_at_most_one() {
    for count in 0..50 {
        let plan = resolve_layout(FormFactor::Tablet, count);
        let left = plan.column_items(0).len();
        let right = plan.column_items(1).len();
        assert_eq!(left + right, count);
        assert!(left == right || left == right + 1, "{count}: {left}/{right}");
    }
}

#[test]
fn viewport_width_drives_the_plan() {
    // Rotating a tablet from portrait to landscape crosses into TV territory
    let portrait = resolve_layout(resolve_form_factor(800.0), 6);
    let landscape = resolve_layout(resolve_form_factor(1280.0), 6);

    assert_eq!(portrait.form_factor, FormFactor::Tablet);
    assert_eq!(landscape.form_factor, FormFactor::Tv);
    assert_eq!(portrait.column_items(0), vec![1, 2, 3]);
    assert_eq!(landscape.row_items(1), vec![1, 2, 3, 4]);
}

#[test]
fn breakpoints_partition_the_width_axis() {
    let bp = Breakpoints::default();
    let mut previous = FormFactor::Mobile;
    let mut changes = Vec::new();
    for width in 0..2000 {
        let current = bp.classify(width as f32);
        if current != previous {
            changes.push((width, current));
            previous = current;
        }
    }
    assert_eq!(changes, vec![(600, FormFactor::Tablet), (960, FormFactor::Tv)]);
}
