use super::*;
use crate::text::{MonospacedTextMeasurer, TextMeasurer};

fn labels(names: &[&str]) -> Vec<FolderLabel> {
    names.iter().map(|name| FolderLabel::new(*name)).collect()
}

fn mono(char_width: f32) -> impl Fn(&str) -> f32 {
    let measurer = MonospacedTextMeasurer::new(char_width);
    move |text| measurer.text_width(text)
}

#[test]
fn empty_input_yields_no_chips() {
    let constraints = ChipConstraints::new(100.0, 300.0);
    let widths = measure_chips(&[], &constraints, mono(8.0)).unwrap();
    assert!(widths.is_empty());

    let zero_budget = constraints.with_max_chip_count(0);
    let widths = measure_chips(&labels(&["Inbox"]), &zero_budget, mono(8.0)).unwrap();
    assert!(widths.is_empty());
}

#[test]
fn output_is_truncated_to_max_chip_count() {
    let constraints = ChipConstraints::new(100.0, 300.0).with_max_chip_count(2);
    let widths = measure_chips(&labels(&["a", "b", "c"]), &constraints, mono(10.0)).unwrap();
    assert_eq!(widths.as_slice(), &[10.0, 10.0]);
}

#[test]
fn narrow_chips_keep_their_needed_width() {
    let constraints = ChipConstraints::new(120.0, 300.0)
        .with_gap(6.0)
        .with_padding(6.0);
    let widths = measure_chips(
        &labels(&["Inbox", "Important stuff here", "Work"]),
        &constraints,
        mono(8.0),
    )
    .unwrap();
    // fair share = floor((300 - 12) / 3) = 96; the middle chip borrows the
    // first chip's slack and is then capped by the cell ceiling.
    assert_eq!(widths.as_slice(), &[52.0, 120.0, 44.0]);
}

#[test]
fn surplus_is_lent_to_the_next_overflowing_chip() {
    let constraints = ChipConstraints::new(200.0, 204.0)
        .with_gap(4.0)
        .with_padding(5.0);
    let input = labels(&["ab", "a_very_long_overflowing_name"]);
    let widths = measure_chips(&input, &constraints, mono(10.0)).unwrap();

    let fair_share = constraints.fair_share(2);
    let needed_first: f32 = 30.0;
    let needed_second: f32 = 290.0;
    let expected = needed_second
        .min(fair_share + (fair_share - needed_first))
        .min(constraints.max_cell_width);
    assert_eq!(widths[0], needed_first);
    assert_eq!(widths[1], expected);
    assert!(widths[1] > fair_share);
}

#[test]
fn leftover_surplus_is_lent_again_to_a_later_chip() {
    let constraints = ChipConstraints::new(200.0, 300.0).with_padding(0.0);
    // fair share = 100; "x" leaves 90 spare, the second chip takes 30 of it
    // and the third chip still finds the 50 it needs in the remainder.
    let input = labels(&["x", "xxxxxxxxxxxxx", "xxxxxxxxxxxxxxx"]);
    let widths = measure_chips(&input, &constraints, mono(10.0)).unwrap();
    assert_eq!(widths.as_slice(), &[10.0, 130.0, 150.0]);
}

#[test]
fn lent_width_is_capped_by_cell_ceiling() {
    let constraints = ChipConstraints::new(120.0, 204.0)
        .with_gap(4.0)
        .with_padding(5.0);
    let input = labels(&["ab", "a_very_long_overflowing_name"]);
    let widths = measure_chips(&input, &constraints, mono(10.0)).unwrap();
    assert_eq!(widths.as_slice(), &[30.0, 120.0]);
}

#[test]
fn short_chip_repays_previous_overflowing_chip() {
    let constraints = ChipConstraints::new(200.0, 204.0)
        .with_gap(4.0)
        .with_padding(5.0);
    let input = labels(&["a_very_long_overflowing_name", "ab"]);
    let widths = measure_chips(&input, &constraints, mono(10.0)).unwrap();
    // First chip gets its fair share of 100 and is owed 100 more; the second
    // chip only needs 30 and hands back its 70 pixels of slack.
    assert_eq!(widths.as_slice(), &[170.0, 30.0]);
    assert_eq!(total_width(&widths, constraints.inter_chip_gap), 204.0);
}

#[test]
fn repayment_only_reaches_the_immediately_preceding_chip() {
    let constraints = ChipConstraints::new(200.0, 308.0)
        .with_gap(4.0)
        .with_padding(0.0);
    // fair share = 100
    let input = labels(&["xxxxxxxxxxxxxxx", "xxxxxxxxxxxxxxx", "xx"]);
    let widths = measure_chips(&input, &constraints, mono(10.0)).unwrap();
    assert_eq!(widths.as_slice(), &[100.0, 150.0, 20.0]);
}

#[test]
fn single_chip_gets_needed_width_when_it_fits() {
    let constraints = ChipConstraints::new(500.0, 100.0).with_padding(5.0);
    let widths = measure_chips(&labels(&["Work"]), &constraints, mono(10.0)).unwrap();
    assert_eq!(widths.as_slice(), &[50.0]);

    let wide = labels(&["Receipts and invoices"]);
    let widths = measure_chips(&wide, &constraints, mono(10.0)).unwrap();
    assert_eq!(widths.as_slice(), &[100.0]);
}

#[test]
fn single_chip_is_floored_to_whole_layout_pixels() {
    let constraints = ChipConstraints::new(500.0, 100.5).with_padding(0.0);
    let widths = measure_chips(&labels(&["Work"]), &constraints, |_| 100.3).unwrap();
    assert_eq!(widths.as_slice(), &[100.0]);
}

#[test]
fn empty_names_and_zero_measurer_yield_padding_only() {
    let constraints = ChipConstraints::new(100.0, 300.0).with_padding(7.0);
    let widths = measure_chips(&labels(&["", "Inbox"]), &constraints, mono(10.0)).unwrap();
    assert_eq!(widths[0], 14.0);

    let widths = measure_chips(&labels(&["Inbox", "Sent", "Drafts"]), &constraints, |_| 0.0)
        .unwrap();
    assert_eq!(widths.as_slice(), &[14.0, 14.0, 14.0]);
}

#[test]
fn no_chip_exceeds_the_cell_ceiling() {
    let names = [
        "Inbox",
        "A folder with a really long descriptive name",
        "x",
        "Another overflowing folder label",
        "Travel",
        "Yet another long long long label",
        "",
    ];
    let input = labels(&names);
    for max_cell in [20.0, 64.0, 96.0, 150.0, 400.0] {
        for max_layout in [0.0, 50.0, 180.0, 320.0, 1000.0] {
            for gap in [0.0, 4.0, 12.0] {
                let constraints = ChipConstraints::new(max_cell, max_layout)
                    .with_gap(gap)
                    .with_padding(4.0);
                let widths = measure_chips(&input, &constraints, mono(7.0)).unwrap();
                assert_eq!(widths.len(), input.len());
                for width in &widths {
                    assert!(
                        *width <= max_cell,
                        "width {width} exceeds ceiling {max_cell} (layout {max_layout}, gap {gap})"
                    );
                    assert!(*width >= 0.0);
                }
            }
        }
    }
}

#[test]
fn remeasuring_gives_identical_results() {
    let constraints = ChipConstraints::new(90.0, 250.0)
        .with_gap(3.0)
        .with_padding(4.0);
    let input = labels(&["Inbox", "Receipts and invoices", "Me", "Family photos"]);
    let first = measure_chips(&input, &constraints, mono(6.5)).unwrap();
    let second = measure_chips(&input, &constraints, mono(6.5)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_constraints_are_rejected() {
    let input = labels(&["Inbox"]);
    let error = measure_chips(&input, &ChipConstraints::new(0.0, 100.0), mono(8.0)).unwrap_err();
    assert_eq!(
        error,
        LayoutError::InvalidArgument {
            name: "max_cell_width",
            value: 0.0
        }
    );
    assert!(measure_chips(&input, &ChipConstraints::new(10.0, -5.0), mono(8.0)).is_err());
}

#[test]
fn total_width_adds_gaps_between_chips() {
    assert_eq!(total_width(&[], 4.0), 0.0);
    assert_eq!(total_width(&[10.0], 4.0), 10.0);
    assert_eq!(total_width(&[10.0, 20.0, 30.0], 4.0), 68.0);
}
