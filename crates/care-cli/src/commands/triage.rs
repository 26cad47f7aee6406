use care_api::ApiClient;
use care_core::entities::{DiagnosisMatch, Triage, TriageDraft, TriagePatch};
use care_core::enums::Severity;
use care_core::pagination::Page;
use care_store::ResourceStore;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{TriageCommands, TriageCreateArgs, TriageUpdateArgs};
use crate::commands::shared::notify::report;
use crate::commands::shared::parse::{clean_list, parse_enum};
use crate::commands::shared::query::list_query;
use crate::context::AppContext;
use crate::output::{output, output_page};
use crate::progress::with_spinner;
use crate::ui;

/// Triage record plus the diagnosis that scored highest.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TriageView {
    #[serde(flatten)]
    triage: Triage,
    best_match: Option<String>,
}

impl TriageView {
    fn new(triage: Triage) -> Self {
        Self {
            best_match: triage.best_match().map(|m| m.diagnosis.clone()),
            triage,
        }
    }
}

/// Handle `carectl triage`.
pub async fn handle(
    action: &TriageCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut store: ResourceStore<Triage> = ResourceStore::new(ctx.client.clone());

    match action {
        TriageCommands::List {
            list,
            patient,
            severity,
        } => {
            let mut query = list_query(list, flags, &ctx.config.general)?;
            if let Some(patient) = patient {
                query = query.filter("patient", patient);
            }
            if let Some(severity) = severity {
                let severity = parse_enum::<Severity>(severity, "severity")?;
                query = query.filter("severity", severity.as_str());
            }
            with_spinner("Fetching triage records", store.fetch(query)).await?;
            let page = Page {
                items: store.items().iter().cloned().map(TriageView::new).collect(),
                pagination: *store.pagination(),
            };
            output_page(&page, flags.format)
        }
        TriageCommands::Get { id } => {
            let triage = with_spinner("Fetching triage record", store.fetch_one(id)).await?.clone();
            output(&TriageView::new(triage), flags.format)
        }
        TriageCommands::Create(args) => {
            let draft = draft_from_args(args, &ctx.client).await?;
            let created = with_spinner("Recording triage", store.create(&draft)).await?;
            report(&store);
            created.map_or(Ok(()), |t| output(&TriageView::new(t), flags.format))
        }
        TriageCommands::Update(args) => {
            let patch = patch_from_args(args, &ctx.client).await?;
            let updated =
                with_spinner("Updating triage record", store.update(&args.id, &patch)).await?;
            report(&store);
            output(&TriageView::new(updated), flags.format)
        }
        TriageCommands::Delete { id } => {
            with_spinner("Deleting triage record", store.delete(id)).await?;
            report(&store);
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        TriageCommands::Diagnoses => {
            let diagnoses = with_spinner("Fetching diagnoses", ctx.client.diagnoses()).await?;
            output(&diagnoses, flags.format)
        }
        TriageCommands::Match { symptoms } => {
            let symptoms = clean_list(symptoms);
            if symptoms.is_empty() {
                anyhow::bail!("at least one non-blank --symptom is required");
            }
            let matches =
                with_spinner("Matching symptoms", ctx.client.suggest_diagnoses(&symptoms)).await?;
            output(&matches, flags.format)
        }
    }
}

/// Ranked matches for `symptoms`. A failed diagnosis fetch degrades to none.
async fn ranked_matches(client: &ApiClient, symptoms: &[String]) -> Vec<DiagnosisMatch> {
    match with_spinner("Matching symptoms", client.suggest_diagnoses(symptoms)).await {
        Ok(matches) => matches,
        Err(error) => {
            tracing::warn!(%error, "diagnosis matching skipped");
            ui::notify_warning(&format!("Diagnosis matching skipped: {}", error.notification()));
            Vec::new()
        }
    }
}

async fn draft_from_args(args: &TriageCreateArgs, client: &ApiClient) -> anyhow::Result<TriageDraft> {
    let symptoms = clean_list(&args.symptoms);
    let diagnosis_matches = if args.no_match || symptoms.is_empty() {
        Vec::new()
    } else {
        ranked_matches(client, &symptoms).await
    };
    Ok(TriageDraft {
        patient: args.patient.clone(),
        symptoms,
        severity: parse_enum(&args.severity, "severity")?,
        notes: args.notes.clone(),
        diagnosis_matches,
    })
}

async fn patch_from_args(args: &TriageUpdateArgs, client: &ApiClient) -> anyhow::Result<TriagePatch> {
    let symptoms = (!args.symptoms.is_empty()).then(|| clean_list(&args.symptoms));
    let diagnosis_matches = match &symptoms {
        Some(symptoms) if !args.no_match && !symptoms.is_empty() => {
            Some(ranked_matches(client, symptoms).await)
        }
        _ => None,
    };
    let patch = TriagePatch {
        symptoms,
        severity: args
            .severity
            .as_deref()
            .map(|s| parse_enum(s, "severity"))
            .transpose()?,
        notes: args.notes.clone(),
        diagnosis_matches,
    };
    if patch == TriagePatch::default() {
        anyhow::bail!("Nothing to update: pass --symptom, --severity or --notes");
    }
    Ok(patch)
}
