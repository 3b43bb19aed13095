use flaily_content::{
    GenerateError, GeneratorConfig, OverflowPolicy, build_instruction_string, build_sign_string, generate,
    generate_with,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn spaced(positions: &[i64], config: &GeneratorConfig) -> bool {
    positions.first().is_none_or(|first| *first >= config.floor)
        && positions.last().is_none_or(|last| *last < config.bound)
        && positions.windows(2).all(|w| w[1] - w[0] >= config.gap)
}

#[test]
fn gap_holds_across_configs_and_seeds() {
    let configs = [
        GeneratorConfig { count: 3, ..GeneratorConfig::default() },
        GeneratorConfig { count: 17, ..GeneratorConfig::default() },
        GeneratorConfig { count: 1, gap: 1, floor: 0, bound: 1, ..GeneratorConfig::default() },
        GeneratorConfig { count: 64, gap: 2, floor: 0, bound: 128, ..GeneratorConfig::default() },
        GeneratorConfig { count: 5, gap: 20, floor: 30, bound: 120, ..GeneratorConfig::default() },
    ];
    for config in &configs {
        for seed in 0..200 {
            let course = generate_with(config, &mut StdRng::seed_from_u64(seed)).expect("config fits");
            let positions = course.to_vec();
            assert_eq!(positions.len(), config.count as usize);
            assert!(spaced(&positions, config), "seed {seed}: {positions:?} for {config:?}");
        }
    }
}

#[test]
fn seeded_generation_is_reproducible() {
    let config = GeneratorConfig { seed: Some(2024), ..GeneratorConfig::default() };
    let first = generate(&config).expect("fits");
    let second = generate(&config).expect("fits");
    assert_eq!(first.obstacles, second.obstacles);
    assert_eq!(first.seed, 2024);
}

#[test]
fn unseeded_generation_reports_a_replayable_seed() {
    let config = GeneratorConfig::default();
    let course = generate(&config).expect("fits");
    let replay = generate(&GeneratorConfig { seed: Some(course.seed), ..config }).expect("fits");
    assert_eq!(course.obstacles, replay.obstacles);
}

#[test]
fn truncation_keeps_every_placement_on_track() {
    for count in [18, 25, 100] {
        let config = GeneratorConfig {
            count,
            policy: OverflowPolicy::Truncate,
            seed: Some(u64::from(count)),
            ..GeneratorConfig::default()
        };
        let course = generate(&config).expect("truncates");
        assert_eq!(course.obstacles.len(), 17);
        assert!(spaced(&course.obstacles.to_vec(), &config));
    }
}

#[test]
fn overflow_is_a_typed_error() {
    let config = GeneratorConfig { count: 18, seed: Some(1), ..GeneratorConfig::default() };
    match generate(&config) {
        Err(GenerateError::GenerationOverflow { requested, fits, .. }) => {
            assert_eq!(requested, 18);
            assert_eq!(fits, 17);
        },
        other => panic!("expected overflow, got {other:?}"),
    }
}

#[test]
fn generated_course_feeds_both_builders() {
    let course = generate(&GeneratorConfig { seed: Some(5), ..GeneratorConfig::default() }).expect("fits");
    let sign = build_sign_string(&course.obstacles);
    assert_eq!(sign.split(' ').filter(|t| *t == "ws").count(), 15);
    let instructions = build_instruction_string(&course.obstacles);
    assert_eq!(instructions.lines().count(), 15);
    for (line, position) in instructions.lines().zip(course.obstacles.iter()) {
        assert_eq!(line, format!("door level1 2 7 {position} 8"));
    }
}
