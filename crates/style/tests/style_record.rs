#![cfg(test)]

use anyhow::Result;
use layout_style::{
    Align, CompactValue, Dimension, Direction, Display, Edge, Enumeration as _, FlexDirection,
    FloatOptional, Gutter, Justify, Overflow, PositionType, Style, Wrap,
};
use log::debug;

fn init_logger() {
    let _ignored = env_logger::builder().is_test(true).try_init();
}

type Mutation = (&'static str, fn(&mut Style));

/// One change per property, each moving its field off the default.
fn mutations() -> [Mutation; 23] {
    [
        ("direction", |style| style.set_direction(Direction::Rtl)),
        ("flex_direction", |style| style.set_flex_direction(FlexDirection::RowReverse)),
        ("justify_content", |style| style.set_justify_content(Justify::SpaceEvenly)),
        ("align_content", |style| style.set_align_content(Align::SpaceAround)),
        ("align_items", |style| style.set_align_items(Align::Baseline)),
        ("align_self", |style| style.set_align_self(Align::FlexEnd)),
        ("position_type", |style| style.set_position_type(PositionType::Absolute)),
        ("flex_wrap", |style| style.set_flex_wrap(Wrap::WrapReverse)),
        ("overflow", |style| style.set_overflow(Overflow::Scroll)),
        ("display", |style| style.set_display(Display::None)),
        ("flex", |style| style.set_flex(1.0)),
        ("flex_grow", |style| style.set_flex_grow(2.0)),
        ("flex_shrink", |style| style.set_flex_shrink(0.0)),
        ("flex_basis", |style| style.set_flex_basis(CompactValue::percent(50.0))),
        ("margin", |style| style.set_margin(Edge::Left, CompactValue::points(10.0))),
        ("position", |style| style.set_position(Edge::Top, CompactValue::points(-3.0))),
        ("padding", |style| style.set_padding(Edge::All, CompactValue::ZERO)),
        ("border", |style| style.set_border(Edge::End, CompactValue::points(1.0))),
        ("gap", |style| style.set_gap(Gutter::Row, CompactValue::points(8.0))),
        ("dimensions", |style| style.set_dimension(Dimension::Width, CompactValue::AUTO)),
        ("min_dimensions", |style| {
            style.set_min_dimension(Dimension::Height, CompactValue::percent(10.0));
        }),
        ("max_dimensions", |style| {
            style.set_max_dimension(Dimension::Width, CompactValue::points(640.0));
        }),
        ("aspect_ratio", |style| style.set_aspect_ratio(1.5)),
    ]
}

#[test]
fn default_record() {
    init_logger();
    let style = Style::default();

    assert_eq!(style.direction(), Direction::Inherit);
    assert_eq!(style.flex_direction(), FlexDirection::Column);
    assert_eq!(style.justify_content(), Justify::FlexStart);
    assert_eq!(style.align_content(), Align::FlexStart);
    assert_eq!(style.align_items(), Align::Stretch);
    assert_eq!(style.align_self(), Align::Auto);
    assert_eq!(style.position_type(), PositionType::Static);
    assert_eq!(style.flex_wrap(), Wrap::NoWrap);
    assert_eq!(style.overflow(), Overflow::Visible);
    assert_eq!(style.display(), Display::Flex);

    assert!(style.flex().is_undefined());
    assert!(style.flex_grow().is_undefined());
    assert!(style.flex_shrink().is_undefined());
    assert!(style.aspect_ratio().is_undefined());
    assert!(style.flex_basis().is_auto());

    for edge in Edge::ALL {
        assert!(style.margin_at(*edge).is_undefined());
        assert!(style.position_at(*edge).is_undefined());
        assert!(style.padding_at(*edge).is_undefined());
        assert!(style.border_at(*edge).is_undefined());
    }
    for gutter in Gutter::ALL {
        assert!(style.gap_at(*gutter).is_undefined());
    }
    for dimension in Dimension::ALL {
        assert!(style.dimension_at(*dimension).is_undefined());
        assert!(style.min_dimension_at(*dimension).is_undefined());
        assert!(style.max_dimension_at(*dimension).is_undefined());
    }

    assert_eq!(style, Style::new());
}

#[test]
fn setting_one_margin_leaves_the_rest_alone() {
    init_logger();
    let mut style = Style::new();
    style.set_margin(Edge::Left, CompactValue::points(10.0));

    assert_eq!(style.margin_at(Edge::Left), CompactValue::points(10.0));
    for edge in Edge::ALL.iter().filter(|edge| **edge != Edge::Left) {
        assert_eq!(style.margin_at(*edge), CompactValue::UNDEFINED, "{edge:?}");
    }
    assert_eq!(style.padding(), Style::new().padding());
    assert_ne!(style, Style::new());
}

#[test]
fn each_mutation_changes_only_its_field() {
    init_logger();
    let baseline = Style::new();
    let mutations = mutations();

    for (name, mutate) in &mutations {
        let mut changed = baseline;
        mutate(&mut changed);
        debug!("after {name}: {changed:?}");
        assert_ne!(changed, baseline, "{name} did not change the record");

        // Re-applying every other mutation on top must not undo this one.
        for (other, apply) in &mutations {
            if other == name {
                continue;
            }
            let mut both = changed;
            apply(&mut both);
            let mut expected = baseline;
            apply(&mut expected);
            mutate(&mut expected);
            assert_eq!(both, expected, "{name} interferes with {other}");
        }
    }
}

#[test]
fn packed_keywords_survive_every_neighbour_value() {
    init_logger();
    let mut style = Style::new();
    style.set_direction(Direction::Rtl);
    style.set_display(Display::None);

    for flex_direction in FlexDirection::ALL {
        for justify in Justify::ALL {
            for position in PositionType::ALL {
                style.set_flex_direction(*flex_direction);
                style.set_justify_content(*justify);
                style.set_position_type(*position);
                assert_eq!(style.flex_direction(), *flex_direction);
                assert_eq!(style.justify_content(), *justify);
                assert_eq!(style.position_type(), *position);
                assert_eq!(style.direction(), Direction::Rtl);
                assert_eq!(style.display(), Display::None);
                assert_eq!(style.align_items(), Align::Stretch);
            }
        }
    }
}

#[test]
fn equality_follows_the_same_setter_sequence() {
    init_logger();
    let mutations = mutations();
    let mut lhs = Style::new();
    let mut rhs = Style::new();
    for (name, mutate) in &mutations {
        mutate(&mut lhs);
        assert_ne!(lhs, rhs, "after {name}");
        mutate(&mut rhs);
        assert_eq!(lhs, rhs, "after {name}");
    }
}

#[test]
fn equality_compares_lengths_by_encoding() {
    init_logger();
    let mut lhs = Style::new();
    let mut rhs = Style::new();

    lhs.set_padding(Edge::Top, CompactValue::points(0.0));
    rhs.set_padding(Edge::Top, CompactValue::points(-0.0));
    assert_eq!(lhs, rhs);

    lhs.set_padding(Edge::Top, CompactValue::points(0.0));
    rhs.set_padding(Edge::Top, CompactValue::percent(0.0));
    assert_ne!(lhs, rhs);

    lhs.set_flex_basis(CompactValue::points(f32::NAN));
    rhs.set_flex_basis(CompactValue::UNDEFINED);
    rhs.set_padding(Edge::Top, CompactValue::points(0.0));
    assert_eq!(lhs, rhs);
}

#[test]
fn unset_numbers_only_equal_unset_numbers() {
    init_logger();
    let mut lhs = Style::new();
    let mut rhs = Style::new();

    lhs.set_flex_grow(f32::NAN);
    assert_eq!(lhs, rhs);

    lhs.set_flex_grow(0.0);
    assert_ne!(lhs, rhs);
    rhs.set_flex_grow(FloatOptional::new(0.0));
    assert_eq!(lhs, rhs);

    lhs.set_aspect_ratio(None::<f32>);
    assert_eq!(lhs.aspect_ratio(), FloatOptional::UNDEFINED);
}

#[test]
fn copies_are_independent() {
    init_logger();
    let original = Style::new();
    let mut copy = original;
    copy.set_align_self(Align::Center);
    copy.set_gap(Gutter::All, CompactValue::points(4.0));

    assert_eq!(original.align_self(), Align::Auto);
    assert!(original.gap_at(Gutter::All).is_undefined());
    assert_ne!(original, copy);
}

#[test]
fn whole_arrays_can_be_replaced() {
    init_logger();
    let mut source = Style::new();
    source.set_border(Edge::Horizontal, CompactValue::points(2.0));
    source.set_border(Edge::Bottom, CompactValue::points(1.0));

    let mut target = Style::new();
    target.replace_border(*source.border());
    assert_eq!(target, source);
    assert_eq!(
        target.border().computed(Edge::Left, CompactValue::ZERO),
        CompactValue::points(2.0)
    );
    assert_eq!(
        target.border().computed(Edge::Top, CompactValue::ZERO),
        CompactValue::ZERO
    );
}

#[test]
fn declarations_build_the_same_record_as_setters() -> Result<()> {
    init_logger();
    let mut declared = Style::new();
    declared.apply_declarations([
        ("flex-direction", "row"),
        ("justify-content", "space-between"),
        ("align-items", "center"),
        ("margin-left", "10"),
        ("padding", "5%"),
        ("gap", "8px"),
        ("width", "100%"),
        ("max-height", "auto"),
        ("flex-grow", "1"),
        ("aspect-ratio", "4 / 3"),
    ])?;

    let mut set = Style::new();
    set.set_flex_direction(FlexDirection::Row);
    set.set_justify_content(Justify::SpaceBetween);
    set.set_align_items(Align::Center);
    set.set_margin(Edge::Left, CompactValue::points(10.0));
    set.set_padding(Edge::All, CompactValue::percent(5.0));
    set.set_gap(Gutter::All, CompactValue::points(8.0));
    set.set_dimension(Dimension::Width, CompactValue::percent(100.0));
    set.set_max_dimension(Dimension::Height, CompactValue::AUTO);
    set.set_flex_grow(1.0);
    set.set_aspect_ratio(4.0 / 3.0);

    assert_eq!(declared, set);
    Ok(())
}
