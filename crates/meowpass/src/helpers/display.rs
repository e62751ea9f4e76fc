//! Terminal output for candidates and the final selection.
use colored::Colorize;
use meowpass_password::{
    complexity::MAX_SCORE, Candidate, Config, NUM_CANDIDATES,
};
use std::io::{Result, Write};

const LOLCAT_ART: &str = r#"                         _,-;'''`' - .
                      _/',  `;  `;    \
      ,        _..,-''    '   `  `      `\
     | ;._.,,-' .| |,_     '   '         `\
     | `;'      ;' ;, `,   ; |    '  '  .   \
     `; __`  ,'__  ` ,  ` ;  |      ;        \
     ; (6_);  (6_) ; |   ,    \        '      |
    ;;   _,6 ,.    ` `,   '    `-._           //
     ,;.=..`_..=.,' -'          ,''        _,//
_00_____`"=,,,=="',___,,,-----'''----'_'_'_''______00_
        Meow Password Generators of Secure Relavant
                               __,,-' /'
                             /'_,,--''
                            | (
                             `'
"#;

/// Print the banner.
pub fn header<W: Write>(out: &mut W) -> Result<()> {
    write!(out, "{}", LOLCAT_ART.truecolor(255, 135, 0))?;
    writeln!(
        out,
        "Meow Password - Cat Name Based Secure Password Generator"
    )?;
    writeln!(
        out,
        "========================================================"
    )
}

/// Print the number of names and the configuration.
pub fn summary<W: Write>(
    out: &mut W,
    names: usize,
    config: &Config,
) -> Result<()> {
    writeln!(out, "Loaded {} meow cat names", names)?;
    writeln!(
        out,
        "Generating {} secure password meow candidates...",
        NUM_CANDIDATES
    )?;
    writeln!(
        out,
        "Config: {} numbers, {} symbols, max meow length {}",
        config.digits(),
        config.symbols(),
        config.max_length()
    )?;
    writeln!(out)
}

/// Print a numbered candidate.
pub fn candidate<W: Write>(
    out: &mut W,
    index: usize,
    candidate: &Candidate,
) -> Result<()> {
    writeln!(out, "Candidate {}: {}", index, candidate.text)?;
    writeln!(
        out,
        "   Meow Score: {:.2}/{:.1}",
        candidate.score(),
        MAX_SCORE
    )?;
    writeln!(out)
}

/// Print the winning candidate and its analysis.
pub fn final_selection<W: Write>(
    out: &mut W,
    candidate: &Candidate,
) -> Result<()> {
    writeln!(out, "{}", "MOST SECURE PASSWORD MEOW SELECTED:".bold())?;
    writeln!(out, "Password: {}", candidate.text)?;
    writeln!(
        out,
        "Final Meow Score: {:.2}/{:.1}",
        candidate.score(),
        MAX_SCORE
    )?;
    writeln!(out)?;
    analysis(out, candidate)
}

/// Print the complexity analysis of a candidate.
pub fn analysis<W: Write>(out: &mut W, candidate: &Candidate) -> Result<()> {
    let result = &candidate.complexity;
    writeln!(out, "    Meow Complexity Analysis:")?;
    writeln!(out, "    - Password: {}", candidate.text)?;
    writeln!(out, "    - Tail Size: {} cm", result.length)?;
    writeln!(out, "    - Ball of Yarn Entropy: {:.3} bits", result.entropy)?;
    writeln!(
        out,
        "    - Mashing Resistance: {:.1}%",
        result.compression_ratio * 100.0
    )?;
    writeln!(
        out,
        "    - Shiny Foil Ball Uniqueness: {:.1}%",
        result.pattern_complexity * 100.0
    )?;
    writeln!(
        out,
        "    - Percent of Organic NonGMO Catnip: {:.1}%",
        result.diversity * 100.0
    )?;
    writeln!(
        out,
        "    - Overall Relavency: {:.2}/{:.1}",
        result.score, MAX_SCORE
    )?;
    writeln!(
        out,
        "    (Lower relevancy is better - high relevance passwords are easy for cats to crack!)"
    )
}
