use indexmap::IndexMap;
use proptest::prelude::*;
use proptest::test_runner::Config;
use selector_format::{Advancement, ArgumentKey, ArgumentValue, Selector};
use selector_types::{Nbt, Range, Target};

fn target() -> impl Strategy<Value = Target> {
    prop::sample::select(Target::ALL.to_vec())
}

fn name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}"
}

fn range() -> impl Strategy<Value = Range> {
    prop_oneof![
        (-100i32..100).prop_map(|v| Range::exact(v)),
        (-100i32..0, 0i32..100).prop_map(|(lo, hi)| Range::between(lo, hi)),
        (-100i32..100).prop_map(|v| Range::at_least(v)),
        (-100i32..100).prop_map(|v| Range::at_most(v)),
    ]
}

fn flags() -> impl Strategy<Value = IndexMap<String, bool>> {
    prop::collection::vec((name(), any::<bool>()), 0..4).prop_map(|v| v.into_iter().collect())
}

fn advancement() -> impl Strategy<Value = Advancement> {
    prop_oneof![any::<bool>().prop_map(Advancement::Done), flags().prop_map(Advancement::Criteria)]
}

fn scalar_value() -> impl Strategy<Value = ArgumentValue> {
    prop_oneof![
        any::<i32>().prop_map(ArgumentValue::from),
        (-1000.0f64..1000.0).prop_map(ArgumentValue::Float),
        "[a-z]{1,8}".prop_map(ArgumentValue::Text),
    ]
}

/// Values accepted under an unrecognised key.
fn other_value() -> impl Strategy<Value = ArgumentValue> {
    prop_oneof![
        any::<i64>().prop_map(ArgumentValue::Int),
        (-1000.0f64..1000.0).prop_map(ArgumentValue::Float),
        any::<bool>().prop_map(ArgumentValue::Bool),
        flags().prop_map(ArgumentValue::Flags),
    ]
}

/// A key together with a value of a shape that key accepts.
fn argument() -> impl Strategy<Value = (ArgumentKey, ArgumentValue)> {
    let scalar_key = prop::sample::select(vec![
        ArgumentKey::X,
        ArgumentKey::Y,
        ArgumentKey::Z,
        ArgumentKey::Dx,
        ArgumentKey::Dy,
        ArgumentKey::Dz,
        ArgumentKey::Distance,
        ArgumentKey::Limit,
        ArgumentKey::Sort,
    ]);
    let range_key =
        prop::sample::select(vec![ArgumentKey::Level, ArgumentKey::XRotation, ArgumentKey::YRotation]);
    let flag_key = prop::sample::select(vec![
        ArgumentKey::Team,
        ArgumentKey::Gamemode,
        ArgumentKey::Name,
        ArgumentKey::Type,
        ArgumentKey::Tag,
        ArgumentKey::Predicate,
    ]);
    prop_oneof![
        (scalar_key, scalar_value()),
        range().prop_map(|r| (ArgumentKey::Distance, ArgumentValue::Range(r))),
        (range_key, range()).prop_map(|(k, r)| (k, ArgumentValue::Range(r))),
        flag_key.prop_flat_map(|k| flags().prop_map(move |f| (k.clone(), ArgumentValue::Flags(f)))),
        prop::collection::vec((name(), range()), 0..3).prop_map(|v| {
            (ArgumentKey::Scores, ArgumentValue::Scores(v.into_iter().collect()))
        }),
        prop::collection::vec((name(), advancement()), 0..3).prop_map(|v| {
            (ArgumentKey::Advancements, ArgumentValue::Advancements(v.into_iter().collect()))
        }),
        (name(), any::<i32>()).prop_map(|(k, v)| {
            (ArgumentKey::Nbt, ArgumentValue::Nbt(Nbt::compound().with(k, v)))
        }),
        (name(), other_value()).prop_map(|(k, v)| (ArgumentKey::parse(&format!("ext_{k}")), v)),
    ]
}

fn selector() -> impl Strategy<Value = Selector> {
    (target(), prop::collection::vec(argument(), 0..6)).prop_map(|(target, args)| {
        args.into_iter()
            .fold(Selector::new(target), |s, (k, v)| s.with_argument(k, v))
    })
}

proptest! {
    #![proptest_config(Config::with_cases(256))]

    #[test]
    fn streaming_concatenation_equals_format(s in selector()) {
        let eager = s.format().expect("generated selectors are well formed");
        let streamed: String = s
            .format_streaming()
            .map(|f| f.expect("generated selectors are well formed"))
            .collect();
        prop_assert_eq!(eager, streamed);
    }

    #[test]
    fn format_is_idempotent(s in selector()) {
        prop_assert_eq!(s.format().unwrap(), s.format().unwrap());
    }

    #[test]
    fn brackets_follow_key_presence(s in selector()) {
        let out = s.format().unwrap();
        let prefix = format!("@{}", s.target);
        if s.arguments.is_empty() {
            prop_assert_eq!(out, prefix);
        } else {
            let open = format!("{prefix}[");
            prop_assert!(out.starts_with(&open));
            prop_assert!(out.ends_with(']'));
        }
    }

    #[test]
    fn body_is_comma_joined_segments(s in selector()) {
        prop_assume!(!s.arguments.is_empty());
        let out = s.format().unwrap();
        let body = format!("[{}]", s.segments().unwrap().join(","));
        prop_assert!(out.ends_with(&body));
    }

    #[test]
    fn write_to_matches_format(s in selector()) {
        let mut sink = Vec::new();
        s.write_to(&mut sink).unwrap();
        prop_assert_eq!(String::from_utf8(sink).unwrap(), s.format().unwrap());
    }

    #[test]
    fn malformed_value_is_reported_by_both_modes(s in selector(), at_end in any::<bool>()) {
        let broken = if at_end {
            s.with_argument("level", "not a range")
        } else {
            Selector::new(Target::Entity).with_argument("level", "not a range")
        };
        prop_assert!(broken.format().is_err());
        prop_assert!(broken.format_streaming().any(|f| f.is_err()));
    }
}

#[test]
fn test_scenario_matches_in_both_modes() {
    let s = Selector::new(Target::Player)
        .distance(Range::at_most(5))
        .tag("vip", true)
        .limit(1)
        .with_argument("sort", "nearest");
    let expected = "@a[distance=..5,tag=vip,limit=1,sort=nearest]";
    assert_eq!(s.format().unwrap(), expected);
    let streamed: String = s.format_streaming().map(Result::unwrap).collect();
    assert_eq!(streamed, expected);
}
