use anyhow::Result;
use clap::Parser;
use meowpass::{
    cli::meowpass::{execute, report, Meowpass},
    Error,
};
use meowpass_catnames::CatNames;
use meowpass_password::{
    rand::{rngs::StdRng, SeedableRng},
    NUM_CANDIDATES,
};
use std::{
    io::Write,
    sync::{Arc, Mutex},
};

fn parse(args: &[&str]) -> Result<Meowpass> {
    let mut argv = vec!["meowpass"];
    argv.extend_from_slice(args);
    Ok(Meowpass::try_parse_from(argv)?)
}

#[test]
fn arguments_are_clamped() -> Result<()> {
    let args = parse(&[
        "--numbers",
        "40",
        "--symbols",
        "-3",
        "--max-length",
        "5",
    ])?;
    let config = args.config(&mut StdRng::seed_from_u64(0));
    assert_eq!(10, config.digits());
    assert_eq!(1, config.symbols());
    assert_eq!(15, config.max_length());
    Ok(())
}

#[test]
fn default_numbers_are_random() -> Result<()> {
    let args = parse(&[])?;
    assert!(args.numbers.is_none());
    let rng = &mut StdRng::seed_from_u64(8);
    for _ in 0..20 {
        let config = args.config(rng);
        assert!((1..=4).contains(&config.digits()));
        assert_eq!(2, config.symbols());
        assert_eq!(25, config.max_length());
    }
    Ok(())
}

#[test]
fn silent_conflicts_with_json() {
    assert!(parse(&["--psssst", "--json"]).is_err());
}

#[test]
fn text_output() -> Result<()> {
    let args = parse(&["--seed", "11", "--numbers", "3"])?;
    let mut out = Vec::new();
    let selection = execute(&args, CatNames::builtin(), &mut out)?;
    let output = String::from_utf8(out)?;

    assert_eq!(NUM_CANDIDATES, output.matches("Candidate ").count());
    assert!(output
        .contains("Config: 3 numbers, 2 symbols, max meow length 25"));
    assert!(output.contains("MOST SECURE PASSWORD MEOW SELECTED:"));
    assert!(output.contains(&format!("Password: {}", selection.best().text)));
    assert!(output.contains("Ball of Yarn Entropy:"));
    Ok(())
}

#[test]
fn json_output() -> Result<()> {
    let args = parse(&["--seed", "11", "--json"])?;
    let mut out = Vec::new();
    let selection = execute(&args, CatNames::builtin(), &mut out)?;
    let value: serde_json::Value = serde_json::from_slice(&out)?;

    assert_eq!(25, value["config"]["maxLength"]);
    let candidates = value["selection"]["candidates"]
        .as_array()
        .expect("candidates array");
    assert_eq!(NUM_CANDIDATES, candidates.len());
    assert_eq!(selection.best_index() as u64, value["selection"]["best"]);

    let best = &candidates[selection.best_index()];
    assert_eq!(selection.best().text, best["text"]);
    assert!(best["complexity"]["compressionRatio"].is_f64());
    Ok(())
}

#[test]
fn silent_mode_prints_nothing() -> Result<()> {
    let args = parse(&["--psssst"])?;
    let mut out = Vec::new();
    execute(&args, CatNames::builtin(), &mut out)?;
    assert!(out.is_empty());
    Ok(())
}

#[test]
fn empty_word_list_fails() -> Result<()> {
    let args = parse(&["--seed", "1"])?;
    let names: Vec<&str> = Vec::new();
    let mut out = Vec::new();
    let result = execute(&args, &names, &mut out);
    assert!(matches!(
        result,
        Err(Error::Password(meowpass_password::Error::EmptyWordList))
    ));
    Ok(())
}

#[test]
fn seeded_runs_match() -> Result<()> {
    let args = parse(&["--seed", "42"])?;
    let (mut first, mut second) = (Vec::new(), Vec::new());
    execute(&args, CatNames::builtin(), &mut first)?;
    execute(&args, CatNames::builtin(), &mut second)?;
    assert_eq!(first, second);
    Ok(())
}

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn failure_is_reported_once() -> Result<()> {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let error = Error::Password(meowpass_password::Error::EmptyWordList);
    tracing::subscriber::with_default(subscriber, || report(&error));

    let logs = String::from_utf8(buffer.0.lock().unwrap().clone())?;
    let message = error.to_string();
    assert_eq!(1, logs.matches(message.as_str()).count());
    assert!(logs.contains("ERROR"));
    Ok(())
}
