//! The tour itself: each step writes its lines to a caller-supplied writer.
//!
//! [`run`] performs every step once with the default [`Profile`]; the step
//! functions are public so they can be checked one at a time.

use std::io::{self, Write};

use crate::profile::{bool_text, favorite, Profile, FRUITS};

/// Iterations of the counting step.
pub const COUNT: u32 = 5;

/// Name passed to [`greet`] at the end of the tour.
pub const GUEST: &str = "Alice";

/// Print `Hello, <name>`.
pub fn greet(out: &mut impl Write, name: &str) -> io::Result<()> {
    writeln!(out, "{}", String::from("Hello, ") + name)
}

/// The three greeting lines built from the profile's bindings.
pub fn greeting(out: &mut impl Write, profile: &Profile) -> io::Result<()> {
    writeln!(out, "{}", String::from("Hello, ") + &profile.name)?;
    writeln!(out, "{}", "You are ".to_owned() + &profile.age.to_string() + " years old")?;
    writeln!(out, "{}", "Are you a student? ".to_owned() + bool_text(profile.is_student))
}

pub fn classification(out: &mut impl Write, profile: &Profile) -> io::Result<()> {
    let class = profile.classify();
    log::debug!("age {} classified as {class:?}", profile.age);
    writeln!(out, "{class}")
}

/// `Count: 0` through `Count: n-1`.
pub fn count(out: &mut impl Write, n: u32) -> io::Result<()> {
    for i in 0..n {
        writeln!(out, "Count: {i}")?;
    }
    Ok(())
}

pub fn favorite_fruit(out: &mut impl Write, fruits: &[&str; 3]) -> io::Result<()> {
    writeln!(out, "My favorite fruit is {}", favorite(fruits))
}

/// Run the whole tour with the default profile.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    run_with(out, &Profile::default())
}

/// Run the whole tour for `profile`.
pub fn run_with(out: &mut impl Write, profile: &Profile) -> io::Result<()> {
    log::debug!("greeting {}", profile.name);
    greeting(out, profile)?;
    classification(out, profile)?;
    log::debug!("counting to {COUNT}");
    count(out, COUNT)?;
    log::debug!("indexing {} fruits", FRUITS.len());
    favorite_fruit(out, &FRUITS)?;
    log::debug!("calling greet({GUEST:?})");
    greet(out, GUEST)?;
    out.flush()
}

/// The lines [`run`] prints, rendered in memory.
pub fn transcript() -> Vec<String> {
    let mut buf = Vec::new();
    run(&mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).lines().map(str::to_owned).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
