use anyhow::Result;
use meowpass_catnames::CatNames;
use meowpass_password::{
    select::best_index, Candidate, Config, Generator, WordList, SYMBOLS,
};

#[test]
fn generated_password_bounds() -> Result<()> {
    let names = CatNames::builtin();
    for (digits, symbols, max_length) in
        [(1, 1, 15), (3, 2, 25), (10, 10, 15), (4, 3, 50), (10, 1, 30)]
    {
        let config = Config::new(digits, symbols, max_length)?;
        let mut generator = Generator::from_seed(config, 2025);
        for _ in 0..50 {
            let password = generator.password(names)?;
            let len = password.chars().count();
            assert!(len >= 10, "{password} is too short");
            assert!(len <= max_length + digits, "{password} is too long");
        }
    }
    Ok(())
}

#[test]
fn generated_password_classes() -> Result<()> {
    let names = CatNames::builtin();
    for (digits, symbols, max_length) in [
        (3, 2, 25),
        (2, 1, 15),
        (10, 10, 15),
        (10, 1, 16),
        (1, 10, 50),
    ] {
        let config = Config::new(digits, symbols, max_length)?;
        let mut generator = Generator::from_seed(config, 7);
        for _ in 0..200 {
            let password = generator.password(names)?;
            println!("{}", password);

            assert!(
                password.chars().any(|c| c.is_ascii_digit()),
                "{password} has no digit"
            );
            assert!(
                password.chars().any(|c| SYMBOLS.contains(&c)),
                "{password} has no symbol"
            );

            let candidate = Candidate::new(password);
            assert!(candidate.score() >= 0.0 && candidate.score() <= 10.0);
        }
    }
    Ok(())
}

#[test]
fn generated_password_keeps_letters() -> Result<()> {
    // Substitution may consume every letter left after truncation
    // when digits and symbols fill the whole password.
    let names = CatNames::builtin();
    for (digits, symbols, max_length) in
        [(3, 2, 25), (2, 1, 15), (10, 1, 16), (1, 10, 50)]
    {
        let config = Config::new(digits, symbols, max_length)?;
        let mut generator = Generator::from_seed(config, 13);
        for _ in 0..200 {
            let password = generator.password(names)?;
            assert!(
                password.chars().any(|c| c.is_ascii_alphabetic()),
                "{password} has no letter"
            );
        }
    }
    Ok(())
}

#[test]
fn seeded_generators_are_reproducible() -> Result<()> {
    let names = CatNames::builtin();
    let config = Config::new(4, 3, 30)?;
    let first = Generator::from_seed(config, 1234).select(names)?;
    let second = Generator::from_seed(config, 1234).select(names)?;

    assert_eq!(first.best_index(), second.best_index());
    assert_eq!(first.candidates(), second.candidates());
    Ok(())
}

#[test]
fn selection_picks_maximum() -> Result<()> {
    let names = CatNames::builtin();
    let mut generator = Generator::from_seed(Config::default(), 55);
    for _ in 0..20 {
        let selection = generator.select(names)?;
        assert_eq!(
            Some(selection.best_index()),
            best_index(selection.candidates())
        );
        let best = selection.best().score();
        assert!(selection.candidates().iter().all(|c| c.score() <= best));
        assert_eq!(best, selection.into_best().score());
    }
    Ok(())
}

#[test]
fn tiny_word_list() -> Result<()> {
    let names = ["Mo"];
    assert_eq!(1, names.count());
    let config = Config::default();
    let mut generator = Generator::from_seed(config, 3);
    for _ in 0..50 {
        let password = generator.password(&names)?;
        let len = password.chars().count();
        assert!(len >= 10, "{password} is too short");
        assert!(len <= config.max_length() + config.digits());
    }
    Ok(())
}
