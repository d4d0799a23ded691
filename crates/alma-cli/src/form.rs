//! Interactive terminal form for collecting a lifestyle profile.
//!
//! Each prompt mirrors one input control: numeric prompts show their
//! valid range and clamp like a slider, selection prompts show a
//! numbered list. Empty input takes the default; EOF or `q` leaves the
//! form.

use almagemela::profile::{
    Location, PersonalityType, Profile, AGE_RANGE, PEOPLE_MET_RANGE, SOCIAL_EVENTS_RANGE,
};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Reads one trimmed line from stdin. `None` means EOF.
fn read_line() -> io::Result<Option<String>> {
    let mut line = String::new();
    let n = io::stdin().lock().read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts for a number in `range`, clamping out-of-range input the way
/// a bounded slider would. Re-prompts on unparsable input.
fn prompt_number(label: &str, range: (u32, u32), default: u32) -> io::Result<Option<u32>> {
    loop {
        print!("{label} [{}-{}] (default {default}): ", range.0, range.1);
        io::stdout().flush()?;

        let Some(line) = read_line()? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(default));
        }
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.parse::<u32>() {
            Ok(value) => return Ok(Some(value.clamp(range.0, range.1))),
            Err(_) => println!("Please enter a whole number."),
        }
    }
}

/// Prompts for one of `options`, shown as a numbered list. Accepts the
/// number or the value's own name.
fn prompt_choice<T>(label: &str, options: &[T], default: T) -> io::Result<Option<T>>
where
    T: Copy + Display + FromStr,
{
    println!("{label}:");
    for (i, option) in options.iter().enumerate() {
        println!("  {:2}. {option}", i + 1);
    }
    loop {
        print!("Choice [1-{}] (default {default}): ", options.len());
        io::stdout().flush()?;

        let Some(line) = read_line()? else {
            return Ok(None);
        };
        if line.is_empty() {
            return Ok(Some(default));
        }
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        if let Ok(index) = line.parse::<usize>() {
            if (1..=options.len()).contains(&index) {
                return Ok(Some(options[index - 1]));
            }
        } else if let Ok(value) = line.parse::<T>() {
            return Ok(Some(value));
        }
        println!("Please pick a number from the list or type a value.");
    }
}

/// Collects one full profile. `None` means the user left the form.
pub(crate) fn collect_profile() -> io::Result<Option<Profile>> {
    let defaults = Profile::default();

    let Some(age) = prompt_number("Age", AGE_RANGE, defaults.age())? else {
        return Ok(None);
    };
    let Some(people_met) =
        prompt_number("People Met Per Year", PEOPLE_MET_RANGE, defaults.people_met_per_year())?
    else {
        return Ok(None);
    };
    let Some(social_events) = prompt_number(
        "Social Events Per Month",
        SOCIAL_EVENTS_RANGE,
        defaults.social_events_per_month(),
    )?
    else {
        return Ok(None);
    };
    let Some(personality) = prompt_choice(
        "Personality Type",
        &PersonalityType::ALL,
        defaults.personality_type(),
    )?
    else {
        return Ok(None);
    };
    let Some(location) = prompt_choice("Location", &Location::ALL, defaults.location())? else {
        return Ok(None);
    };

    Ok(Some(Profile::new(
        age,
        people_met,
        social_events,
        personality,
        location,
    )))
}

/// Asks whether to run another estimate. Defaults to yes.
pub(crate) fn confirm_again() -> io::Result<bool> {
    print!("\nAdjust and estimate again? [Y/n]: ");
    io::stdout().flush()?;
    match read_line()? {
        None => Ok(false),
        Some(line) => Ok(!(line.eq_ignore_ascii_case("n") || line.eq_ignore_ascii_case("q"))),
    }
}
