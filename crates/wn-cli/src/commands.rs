use std::io::Write;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use tracing::info;

use wn_content::ContentType;
use wn_store::{InMemoryLexicalStore, LexicalStore, LexiconSnapshot};
use wn_types::{ExceptionEntry, Pos};
use wn_walk::{render, MissingSenseEntry, Trace, WalkConfig, Walker};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Walk(args) => cmd_walk(&args, cli.format, &mut out),
        Command::Morph(args) => cmd_morph(&args, cli.format, &mut out),
        Command::ContentTypes => cmd_content_types(cli.format, &mut out),
    }
}

fn load_store(path: &Path) -> anyhow::Result<InMemoryLexicalStore> {
    let snapshot = LexiconSnapshot::load(path)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;
    info!(path = %path.display(), records = snapshot.len(), "snapshot loaded");
    Ok(InMemoryLexicalStore::from_snapshot(snapshot))
}

/// The configuration file (if any) with command-line flags applied on top.
fn walk_config(args: &WalkArgs) -> anyhow::Result<WalkConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            WalkConfig::from_toml_str(&text)?
        }
        None => WalkConfig::default(),
    };
    if let Some(max_depth) = args.max_depth {
        config.max_depth = Some(max_depth);
    }
    if args.detect_cycles {
        config.detect_cycles = true;
    }
    if args.skip_inconsistent {
        config.on_missing_sense_entry = MissingSenseEntry::Skip;
    }
    Ok(config)
}

fn cmd_walk(args: &WalkArgs, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let config = walk_config(args)?;
    let store = load_store(&args.data)?;
    let walker = Walker::new(&store, config);

    for lemma in &args.lemmas {
        let trace = walker
            .walk(lemma)
            .with_context(|| format!("failed to walk {lemma:?}"))?;
        match format {
            OutputFormat::Text => write!(out, "{}", render(&trace, &walker.config().indent))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&trace)?)?,
        }
        report(lemma, &trace);
    }
    Ok(())
}

/// Summarize on stderr what the walk left out, keeping stdout clean.
fn report(lemma: &str, trace: &Trace) {
    if trace.is_empty() {
        eprintln!("{} no entries for {}", "!".yellow(), lemma.bold());
    }
    if !trace.is_complete() {
        eprintln!(
            "{} {}: {} branches truncated, {} cycles cut, {} senses skipped",
            "!".yellow(),
            lemma.bold(),
            trace.truncated_branches,
            trace.cycles_cut,
            trace.skipped_senses
        );
    }
}

fn cmd_morph(args: &MorphArgs, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let parts: Vec<Pos> = match &args.pos {
        Some(pos) => vec![pos.parse()?],
        None => Pos::ALL.to_vec(),
    };
    let store = load_store(&args.data)?;
    let mut entries: Vec<ExceptionEntry> = Vec::new();
    for pos in parts {
        if let Some(entry) = store.exception_entry(&args.form, pos)? {
            entries.push(entry);
        }
    }

    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&entries)?)?,
        OutputFormat::Text => {
            for entry in &entries {
                writeln!(
                    out,
                    "{} ({}) -> {}",
                    entry.surface_form,
                    entry.pos,
                    entry.root_forms.join(" ")
                )?;
            }
        }
    }
    if entries.is_empty() {
        eprintln!("{} no exception entry for {}", "!".yellow(), args.form.bold());
    }
    Ok(())
}

fn cmd_content_types(format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let values = wn_content::values();
    match format {
        OutputFormat::Json => {
            let rows: Vec<serde_json::Value> = values.iter().map(content_type_json).collect();
            writeln!(out, "{}", serde_json::to_string_pretty(&rows)?)?;
        }
        OutputFormat::Text => {
            writeln!(
                out,
                "{}",
                format!(
                    "{:<10} {:<10} {:<10} {:<8} {}",
                    "KIND", "POS", "ORDERING", "CHARSET", "RESOURCE"
                )
                .bold()
            )?;
            for content_type in values {
                writeln!(
                    out,
                    "{:<10} {:<10} {:<10} {:<8} {}",
                    content_type.kind().to_string(),
                    content_type.pos().map_or("-".to_string(), |p| p.to_string()),
                    content_type.ordering().map_or("unordered", |o| o.name()),
                    content_type.encoding().map_or("default", |c| c.label()),
                    content_type.resource_name().unwrap_or_default().cyan()
                )?;
            }
        }
    }
    Ok(())
}

fn content_type_json(content_type: &ContentType) -> serde_json::Value {
    serde_json::json!({
        "kind": content_type.kind().to_string(),
        "pos": content_type.pos(),
        "ordering": content_type.ordering().map(|o| o.name()),
        "encoding": content_type.encoding(),
        "resource": content_type.resource_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use wn_types::{IndexEntry, SenseEntry, SenseKey, Synset, SynsetId, Word, WordId};

    fn snapshot() -> LexiconSnapshot {
        let id = SynsetId::new(1_740, Pos::Noun).unwrap();
        let key = SenseKey::new("entity", 1, 3, 0).unwrap();
        LexiconSnapshot {
            index: vec![IndexEntry::new("entity", Pos::Noun).with_sense(id)],
            synsets: vec![Synset {
                id,
                lex_file: 3,
                words: vec![Word {
                    id: WordId::by_number(id, 1),
                    lemma: "entity".into(),
                    lex_id: 0,
                    sense_key: key.clone(),
                    adj_marker: None,
                    verb_frames: Vec::new(),
                    related: Vec::new(),
                }],
                gloss: "that which exists".into(),
                related: Vec::new(),
            }],
            senses: vec![SenseEntry {
                sense_key: key,
                offset: 1_740,
                sense_number: 1,
                tag_count: 11,
            }],
            exceptions: vec![ExceptionEntry {
                surface_form: "entities".into(),
                pos: Pos::Noun,
                root_forms: vec!["entity".into()],
            }],
        }
    }

    fn walk_args(data: PathBuf, lemmas: &[&str]) -> WalkArgs {
        WalkArgs {
            data,
            config: None,
            max_depth: None,
            detect_cycles: false,
            skip_inconsistent: false,
            lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn walk_renders_snapshot_to_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        snapshot().save(&path).unwrap();

        let mut out = Vec::new();
        cmd_walk(&walk_args(path, &["entity"]), OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\n====="));
        assert!(text.contains("■ pos = NOUN\n"));
        assert!(text.contains("  sensenum = 1 tagcnt=11\n"));
        assert!(text.ends_with("● synset = {entity} that which exists\n"));
    }

    #[test]
    fn walk_emits_json_trace_per_lemma() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.bin");
        snapshot().save(&path).unwrap();

        let mut out = Vec::new();
        cmd_walk(
            &walk_args(path, &["entity", "nothing"]),
            OutputFormat::Json,
            &mut out,
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        let traces: Vec<Trace> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].parts_of_speech(), vec![Pos::Noun]);
        assert!(traces[1].is_empty());
    }

    #[test]
    fn walk_with_missing_snapshot_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = cmd_walk(
            &walk_args(dir.path().join("absent.json"), &["entity"]),
            OutputFormat::Text,
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("failed to load snapshot"));
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("walk.toml");
        std::fs::write(&config_path, "max_depth = 10\nindent = \"  \"\n").unwrap();

        let mut args = walk_args(dir.path().join("x.json"), &["entity"]);
        args.config = Some(config_path);
        let config = walk_config(&args).unwrap();
        assert_eq!(config.max_depth, Some(10));
        assert_eq!(config.indent, "  ");
        assert_eq!(config.on_missing_sense_entry, MissingSenseEntry::Abort);

        args.max_depth = Some(2);
        args.detect_cycles = true;
        args.skip_inconsistent = true;
        let config = walk_config(&args).unwrap();
        assert_eq!(config.max_depth, Some(2));
        assert!(config.detect_cycles);
        assert_eq!(config.on_missing_sense_entry, MissingSenseEntry::Skip);
        assert_eq!(config.indent, "  ");
    }

    #[test]
    fn morph_lists_root_forms() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lexicon.json");
        snapshot().save(&path).unwrap();

        let mut out = Vec::new();
        let args = MorphArgs {
            data: path.clone(),
            pos: None,
            form: "Entities".into(),
        };
        cmd_morph(&args, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "entities (noun) -> entity\n");

        let mut out = Vec::new();
        let args = MorphArgs {
            data: path,
            pos: Some("v".into()),
            form: "entities".into(),
        };
        cmd_morph(&args, OutputFormat::Json, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn content_types_lists_every_builtin() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        cmd_content_types(OutputFormat::Text, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert!(lines[0].starts_with("KIND"));
        assert!(lines[1].contains("index.noun"));
        assert!(lines[13].contains("index.sense"));

        let mut out = Vec::new();
        cmd_content_types(OutputFormat::Json, &mut out).unwrap();
        let rows: Vec<serde_json::Value> = serde_json::from_slice(&out).unwrap();
        assert_eq!(rows.len(), 13);
        assert_eq!(rows[12]["pos"], serde_json::Value::Null);
        assert_eq!(rows[0]["ordering"], "index");
    }
}
