use crate::commands::{print_json, Context};
use crate::error::{invalid_input, not_found};
use crate::util::{normalize_optional_value, now_utc, parse_patient_id, today};
use anyhow::Result;
use carelog_core::domain::{Patient, PatientDraft};
use carelog_core::dto::{PatientDetailDto, PatientListItemDto};
use carelog_store::repo::PatientUpdate;
use clap::{ArgAction, Args};
use std::io::{self, BufRead, Write};

#[derive(Debug, Args)]
pub struct AddPatientArgs {
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub phone: String,
    #[arg(long = "email", value_name = "EMAIL")]
    pub emails: Vec<String>,
    #[arg(long)]
    pub birth_date: String,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long, value_name = "CM")]
    pub height: String,
    #[arg(long, value_name = "KG")]
    pub weight: String,
    #[arg(long)]
    pub health_notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditPatientArgs {
    pub id: String,
    #[arg(long)]
    pub first_name: Option<String>,
    #[arg(long)]
    pub last_name: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long = "email", value_name = "EMAIL")]
    pub emails: Vec<String>,
    #[arg(long)]
    pub birth_date: Option<String>,
    #[arg(long)]
    pub gender: Option<String>,
    #[arg(long, value_name = "CM")]
    pub height: Option<String>,
    #[arg(long, value_name = "KG")]
    pub weight: Option<String>,
    #[arg(long)]
    pub health_notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    pub id: String,
}

#[derive(Debug, Args)]
pub struct ListArgs {}

#[derive(Debug, Args)]
pub struct SearchArgs {
    pub query: String,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    pub id: String,
    /// Skip the confirmation prompt
    #[arg(long, action = ArgAction::SetTrue)]
    pub yes: bool,
}

pub fn add_patient(ctx: &Context<'_>, args: AddPatientArgs) -> Result<()> {
    let draft = PatientDraft {
        first_name: args.first_name,
        last_name: args.last_name,
        phone: args.phone,
        emails: args.emails,
        birth_date: args.birth_date,
        gender: args.gender,
        height: args.height,
        weight: args.weight,
        health_notes: args.health_notes,
    };

    let patient = ctx.store.patients().create(now_utc(), today(), draft)?;

    if ctx.json {
        print_json(&patient)?;
    } else {
        println!(
            "created {} {} (bmi {} {})",
            patient.id,
            patient.contact.full_name(),
            patient.contact.bmi,
            patient.bmi_category
        );
    }
    Ok(())
}

pub fn edit_patient(ctx: &Context<'_>, args: EditPatientArgs) -> Result<()> {
    let id = parse_patient_id(&args.id)?;

    let mut update = PatientUpdate::default();
    if let Some(value) = args.first_name {
        update.first_name = Some(value);
    }
    if let Some(value) = args.last_name {
        update.last_name = Some(value);
    }
    if let Some(value) = args.phone {
        update.phone = Some(value);
    }
    if !args.emails.is_empty() {
        update.emails = Some(args.emails);
    }
    if let Some(value) = args.birth_date {
        update.birth_date = Some(value);
    }
    if let Some(value) = args.gender {
        update.gender = Some(normalize_optional_value(value));
    }
    if let Some(value) = args.height {
        update.height = Some(value);
    }
    if let Some(value) = args.weight {
        update.weight = Some(value);
    }
    if let Some(value) = args.health_notes {
        update.health_notes = Some(normalize_optional_value(value));
    }

    if update.is_empty() {
        return Err(invalid_input("no updates provided"));
    }

    let patient = ctx.store.patients().update(now_utc(), today(), id, update)?;
    if ctx.json {
        print_json(&patient)?;
    } else {
        println!(
            "updated {} {} (bmi {} {})",
            patient.id,
            patient.contact.full_name(),
            patient.contact.bmi,
            patient.bmi_category
        );
    }
    Ok(())
}

pub fn show_patient(ctx: &Context<'_>, args: ShowArgs) -> Result<()> {
    let id = parse_patient_id(&args.id)?;
    let patient = ctx
        .store
        .patients()
        .get(id)?
        .ok_or_else(|| not_found("patient not found"))?;

    let detail = PatientDetailDto::from_patient(
        &patient,
        today(),
        ctx.config.display.date_format.pattern(),
    );

    if ctx.json {
        print_json(&detail)?;
        return Ok(());
    }

    println!("id: {}", detail.id);
    println!("name: {} {}", detail.first_name, detail.last_name);
    println!("phone: {}", detail.phone);
    println!("emails: {}", detail.emails.join(", "));
    println!("birth_date: {} (age {})", detail.birth_date, detail.age);
    if let Some(gender) = detail.gender.as_deref() {
        println!("gender: {}", gender);
    }
    println!("height_cm: {}", detail.height_cm);
    println!("weight_kg: {}", detail.weight_kg);
    println!("bmi: {} ({})", detail.bmi, detail.bmi_category);
    if let Some(notes) = detail.health_notes.as_deref() {
        println!("health_notes: {}", notes);
    }
    Ok(())
}

pub fn list_patients(ctx: &Context<'_>, _args: ListArgs) -> Result<()> {
    let patients = ctx.store.patients().list()?;
    print_patient_lines(ctx, &patients)
}

pub fn search_patients(ctx: &Context<'_>, args: SearchArgs) -> Result<()> {
    let patients = ctx.store.patients().search(&args.query)?;
    print_patient_lines(ctx, &patients)
}

pub fn delete_patient(ctx: &Context<'_>, args: DeleteArgs) -> Result<()> {
    let id = parse_patient_id(&args.id)?;
    let patient = ctx
        .store
        .patients()
        .get(id)?
        .ok_or_else(|| not_found("patient not found"))?;

    if !args.yes && !confirm_delete(&patient.contact.full_name())? {
        println!("delete cancelled");
        return Ok(());
    }

    ctx.store.patients().delete(id)?;
    if !ctx.json {
        println!("deleted {} {}", patient.id, patient.contact.full_name());
    }
    Ok(())
}

fn print_patient_lines(ctx: &Context<'_>, patients: &[Patient]) -> Result<()> {
    let reference = today();
    let items: Vec<PatientListItemDto> = patients
        .iter()
        .map(|patient| PatientListItemDto::from_patient(patient, reference))
        .collect();

    if ctx.json {
        print_json(&items)?;
        return Ok(());
    }

    if items.is_empty() {
        println!("no patients found");
        return Ok(());
    }

    for item in items {
        if ctx.config.display.show_bmi {
            println!(
                "{}  {}  age {}  bmi {} {}",
                item.id, item.full_name, item.age, item.bmi, item.bmi_category
            );
        } else {
            println!("{}  {}  age {}", item.id, item.full_name, item.age);
        }
    }
    Ok(())
}

fn confirm_delete(name: &str) -> Result<bool> {
    let mut stderr = io::stderr().lock();
    write!(stderr, "delete patient {}? [y/N] ", name)?;
    stderr.flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y"))
}
