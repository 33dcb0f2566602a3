use crate::commands::{print_json, Context};
use anyhow::Result;
use carelog_core::domain::parse_measurement;
use carelog_core::rules::{bmi_category, calculate_bmi};
use clap::Args;
use serde::Serialize;

#[derive(Debug, Args)]
pub struct BmiArgs {
    #[arg(long, value_name = "KG")]
    pub weight: String,
    #[arg(long, value_name = "CM")]
    pub height: String,
}

#[derive(Debug, Serialize)]
struct BmiOutput {
    bmi: f64,
    category: String,
}

/// Standalone calculation; only positivity is checked here, the stricter
/// record ranges apply when a patient is actually saved.
pub fn calculate(ctx: &Context<'_>, args: BmiArgs) -> Result<()> {
    let weight = parse_measurement(&args.weight, "weight")?;
    let height = parse_measurement(&args.height, "height")?;
    let bmi = calculate_bmi(weight, height)?;
    let category = bmi_category(bmi).to_string();

    if ctx.json {
        print_json(&BmiOutput { bmi, category })?;
    } else {
        println!("bmi: {}", bmi);
        println!("category: {}", category);
    }
    Ok(())
}
