//! `alma estimate`: the evaluation flow.
//!
//! With profile flags, runs a single evaluation and exits. Without, an
//! interactive form loops until the user quits; every failure is shown
//! and the form stays usable for the next attempt.

use crate::error::Result;
use crate::{form, output};
use almagemela::encoding::encode;
use almagemela::model::SoulmateModel;
use almagemela::present::{format_probability, present_error};
use almagemela::profile::{Location, PersonalityType, Profile};
use clap::Args;
use std::path::Path;

/// Profile flags: any present switches to one-shot mode, missing fields
/// take the control defaults.
#[derive(Args)]
pub(crate) struct ProfileArgs {
    /// Age in years (18-60)
    #[arg(long, value_name = "YEARS")]
    age: Option<u32>,

    /// New people met per year (0-1000)
    #[arg(long = "people-met", value_name = "COUNT")]
    people_met: Option<u32>,

    /// Social events attended per month (0-30)
    #[arg(long = "events", value_name = "COUNT")]
    social_events: Option<u32>,

    /// Personality type code (e.g. ENFP)
    #[arg(long, value_name = "CODE")]
    personality: Option<PersonalityType>,

    /// Location (Urban, Suburban or Rural)
    #[arg(long, value_name = "NAME")]
    location: Option<Location>,
}

impl ProfileArgs {
    fn is_empty(&self) -> bool {
        self.age.is_none()
            && self.people_met.is_none()
            && self.social_events.is_none()
            && self.personality.is_none()
            && self.location.is_none()
    }

    fn into_profile(self) -> Profile {
        let defaults = Profile::default();
        Profile::new(
            self.age.unwrap_or(defaults.age()),
            self.people_met.unwrap_or(defaults.people_met_per_year()),
            self.social_events
                .unwrap_or(defaults.social_events_per_month()),
            self.personality.unwrap_or(defaults.personality_type()),
            self.location.unwrap_or(defaults.location()),
        )
    }
}

pub(crate) fn run(model_path: &Path, args: ProfileArgs, quiet: bool) -> Result<()> {
    // Loaded once at startup and held read-only for the process
    // lifetime; each evaluation reuses the same artifact.
    let model = SoulmateModel::load(model_path)?;
    if !quiet {
        output::info(&format!(
            "Loaded model ({} features) from {}",
            model.n_features(),
            model_path.display()
        ));
    }

    if !args.is_empty() {
        let profile = args.into_profile();
        let row = encode(&profile, model.expected_columns());
        let probability = model.predict(&row)?;
        present_result(probability);
        return Ok(());
    }

    if !quiet {
        println!("Estimate your chances of meeting your soulmate based on your lifestyle and preferences.");
    }
    loop {
        let Some(profile) = form::collect_profile()? else {
            break;
        };
        let row = encode(&profile, model.expected_columns());
        match model.predict(&row) {
            Ok(probability) => present_result(probability),
            Err(e) => output::error(&present_error(&e)),
        }
        if !form::confirm_again()? {
            break;
        }
    }
    Ok(())
}

fn present_result(probability: f32) {
    output::section("Predicted Soulmate Probability");
    output::metric("Chance", &format_probability(probability));
}
