use bfsynth::brainfuck::execute;
use bfsynth::synth::{synthesize, synthesize_text, text_codes, verify};

const STEP_LIMIT: Option<u64> = Some(50_000_000);

fn round_trip(codes: &[i32]) {
    let program = synthesize(codes);
    assert_eq!(
        program.matches('.').count(),
        codes.len(),
        "output count for {codes:?}"
    );
    assert!(
        program.chars().all(|c| "<>+-[].".contains(c)),
        "alphabet for {codes:?}"
    );
    let printed = execute(&program, STEP_LIMIT).unwrap();
    let expected: Vec<i64> = codes.iter().map(|&c| i64::from(c)).collect();
    assert_eq!(printed, expected, "program {program}");
}

#[test]
fn hello_world() {
    let text = "Hello world!\n";
    let program = synthesize_text(text);
    verify(&text_codes(text), &program, STEP_LIMIT).unwrap();
}

#[test]
fn empty_input() {
    assert_eq!(synthesize(&[]), "");
    assert_eq!(execute("", None).unwrap(), Vec::<i64>::new());
}

#[test]
fn single_values() {
    for code in -300..=300 {
        round_trip(&[code]);
    }
}

#[test]
fn every_pair_of_small_codes() {
    for a in (0..=130).step_by(3) {
        for b in 0..=130 {
            round_trip(&[a, b]);
        }
    }
}

#[test]
fn negative_and_repeated_codes() {
    round_trip(&[-5, -5, -200, 40, -40, 0, 0, 0]);
    round_trip(&[0]);
    round_trip(&[0, 0]);
    round_trip(&[-1, 1, -1, 1]);
}

#[test]
fn non_ascii_text() {
    let text = "Grüße, 世界 ✓";
    verify(&text_codes(text), &synthesize_text(text), STEP_LIMIT).unwrap();
}

#[test]
fn large_rise_uses_a_loop() {
    let program = synthesize(&[0, 100]);
    assert!(program.contains('['));
    assert!(program.len() < 100);
    round_trip(&[0, 100]);
}

#[test]
fn drop_to_zero_resets_the_cell() {
    let program = synthesize(&[100, 0]);
    assert!(program.ends_with("[-]."));
    round_trip(&[100, 0]);
}

#[test]
fn repeated_character_needs_no_change() {
    let single = synthesize(&[72]);
    let double = synthesize(&[72, 72]);
    assert_eq!(double, format!("{single}."));
}

#[test]
fn output_is_deterministic() {
    let codes = text_codes("The quick brown fox jumps over the lazy dog");
    assert_eq!(synthesize(&codes), synthesize(&codes));
    round_trip(&codes);
}
