use clap::Args;
use skill_tier::candidates::tier::classify_with_rule;
use skill_tier::candidates::{
    describe, rationale, Assessment, Candidate, CandidateQuery, CandidateRepository,
    InMemoryCandidateStore, SortField, SortOrder, TierCounts, TierFilter,
};
use skill_tier::config::{AppConfig, ConfigError};
use skill_tier::error::AppError;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Path to a JSON file holding a single assessment object
    #[arg(long)]
    pub(crate) assessment: PathBuf,
}

#[derive(Args, Debug, Default)]
pub(crate) struct StoreArgs {
    /// Candidate snapshot to read (defaults to APP_DATA_FILE)
    #[arg(long)]
    pub(crate) data_file: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ListArgs {
    #[command(flatten)]
    pub(crate) store: StoreArgs,
    /// Only show one tier (0-4), or `all`
    #[arg(long)]
    pub(crate) tier: Option<TierFilter>,
    /// Sort by name, email, tier, or createdAt
    #[arg(long)]
    pub(crate) sort: Option<SortField>,
    /// Sort direction: asc or desc
    #[arg(long)]
    pub(crate) order: Option<SortOrder>,
    /// Case-insensitive search on name or email
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Emit CSV instead of the human-readable listing
    #[arg(long)]
    pub(crate) csv: bool,
}

impl ListArgs {
    fn query(&self) -> CandidateQuery {
        CandidateQuery {
            tier: self.tier.unwrap_or_default(),
            search: self.search.clone(),
            sort: self.sort.unwrap_or_default(),
            order: self.order.unwrap_or_default(),
        }
    }
}

pub(crate) fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let raw = std::fs::read(&args.assessment)?;
    let assessment: Assessment = serde_json::from_slice(&raw)?;
    render_classification(&assessment, &mut io::stdout().lock())?;
    Ok(())
}

pub(crate) fn run_list(args: ListArgs) -> Result<(), AppError> {
    let store = open_store(&args.store)?;
    let candidates = store.list(&args.query())?;
    let mut out = io::stdout().lock();

    if args.csv {
        render_csv(&candidates, &mut out)?;
    } else {
        render_listing(&candidates, &mut out)?;
    }
    Ok(())
}

pub(crate) fn run_stats(args: StoreArgs) -> Result<(), AppError> {
    let store = open_store(&args)?;
    let total = store.count()?;
    let counts = store.count_by_tier()?;
    render_stats(total, &counts, &mut io::stdout().lock())?;
    Ok(())
}

fn open_store(args: &StoreArgs) -> Result<InMemoryCandidateStore, AppError> {
    let path = match &args.data_file {
        Some(path) => path.clone(),
        None => AppConfig::load()?
            .store
            .data_file
            .ok_or(ConfigError::MissingDataFile)?,
    };
    Ok(InMemoryCandidateStore::open(path)?)
}

pub(crate) fn render_classification(
    assessment: &Assessment,
    out: &mut impl Write,
) -> io::Result<()> {
    let (tier, rule) = classify_with_rule(assessment);
    let descriptor = describe(tier);

    writeln!(out, "Tier {}: {}", tier, descriptor.name)?;
    writeln!(
        out,
        "Matched rule: {}",
        rule.map(|rule| rule.name).unwrap_or("none (fallback)")
    )?;
    writeln!(out, "{}", rationale(tier))
}

pub(crate) fn render_listing(candidates: &[Candidate], out: &mut impl Write) -> io::Result<()> {
    if candidates.is_empty() {
        return writeln!(out, "No candidates match the current filters");
    }

    for candidate in candidates {
        writeln!(
            out,
            "- {} <{}> | tier {} ({}) | submitted {}",
            candidate.name,
            candidate.email,
            candidate.tier,
            describe(candidate.tier).name,
            candidate.created_at.format("%Y-%m-%d %H:%M UTC")
        )?;
    }
    Ok(())
}

pub(crate) fn render_csv(candidates: &[Candidate], out: &mut impl Write) -> io::Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["id", "name", "email", "phone", "tier", "created_at"])?;
    for candidate in candidates {
        writer.write_record([
            candidate.id.as_str(),
            candidate.name.as_str(),
            candidate.email.as_str(),
            candidate.phone.as_str(),
            &candidate.tier.to_string(),
            &candidate.created_at.to_rfc3339(),
        ])?;
    }
    writer.flush()
}

pub(crate) fn render_stats(total: usize, counts: &TierCounts, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Total candidates: {total}")?;
    for (tier, count) in counts.iter() {
        writeln!(out, "- Tier {} {}: {}", tier, describe(tier).name, count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use skill_tier::candidates::{CandidateId, NewCandidate, Registration, Tier};

    fn sample_candidate(name: &str, email: &str) -> Candidate {
        let assessment = Assessment {
            can_build_crud: true,
            ..Assessment::default()
        };
        NewCandidate::classified(
            Registration {
                name: name.to_string(),
                email: email.to_string(),
                phone: "515-555-0100".to_string(),
            },
            assessment,
        )
        .into_candidate(
            CandidateId("cand-1".to_string()),
            Utc.with_ymd_and_hms(2025, 10, 1, 9, 30, 0).unwrap(),
        )
    }

    #[test]
    fn classification_output_names_tier_and_rule() {
        let assessment = Assessment {
            knows_golang: true,
            can_build_go_api: true,
            can_integrate_go_with_frontend: true,
            ..Assessment::default()
        };
        let mut out = Vec::new();
        render_classification(&assessment, &mut out).expect("render");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("Tier 4: Advanced Full-Stack Developer"));
        assert!(text.contains("Matched rule: golang-api"));
    }

    #[test]
    fn classification_output_marks_fallback() {
        let mut out = Vec::new();
        render_classification(&Assessment::default(), &mut out).expect("render");
        let text = String::from_utf8(out).expect("utf8");
        assert!(text.contains("none (fallback)"));
    }

    #[test]
    fn csv_export_quotes_fields() {
        let candidates = vec![sample_candidate("Doe, Jane", "jane@example.com")];
        let mut out = Vec::new();
        render_csv(&candidates, &mut out).expect("render");

        let text = String::from_utf8(out).expect("utf8");
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id,name,email,phone,tier,created_at"));
        assert_eq!(
            lines.next(),
            Some("cand-1,\"Doe, Jane\",jane@example.com,515-555-0100,1,2025-10-01T09:30:00+00:00")
        );
    }

    #[test]
    fn listing_reports_empty_results() {
        let mut out = Vec::new();
        render_listing(&[], &mut out).expect("render");
        assert_eq!(
            String::from_utf8(out).expect("utf8"),
            "No candidates match the current filters\n"
        );
    }

    #[test]
    fn stats_list_every_tier() {
        let counts = TierCounts::tally([Tier::Beginner, Tier::Beginner, Tier::MultiFramework].iter());
        let mut out = Vec::new();
        render_stats(3, &counts, &mut out).expect("render");

        let text = String::from_utf8(out).expect("utf8");
        assert!(text.starts_with("Total candidates: 3\n"));
        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("- Tier 0 Beginner: 2"));
        assert!(text.contains("- Tier 3 Multi-Framework Developer: 1"));
    }

    #[test]
    fn list_reads_from_explicit_data_file() {
        let temp = tempfile::tempdir().expect("temp dir");
        let path = temp.path().join("candidates.json");
        let store = InMemoryCandidateStore::open(&path).expect("open store");
        store
            .insert(NewCandidate::classified(
                Registration {
                    name: "Jane Doe".to_string(),
                    email: "jane@example.com".to_string(),
                    phone: "515-555-0100".to_string(),
                },
                Assessment::default(),
            ))
            .expect("insert");

        let reopened = open_store(&StoreArgs {
            data_file: Some(path),
        })
        .expect("open from args");
        assert_eq!(reopened.count().expect("count"), 1);
    }
}
