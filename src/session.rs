use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use thiserror::Error;

use crate::config::QueryConfig;
use crate::data::filter::{self, Criterion, FieldFilter, FilterSet};
use crate::data::loader::{self, LoadError};
use crate::data::model::{Dataset, RankingEntry};
use crate::data::rank;

// ---------------------------------------------------------------------------
// Collaborator seams
// ---------------------------------------------------------------------------

/// Produces the path of the file to analyse, or `None` if the user cancelled.
pub trait FileSelector {
    fn select(&mut self) -> Option<PathBuf>;
}

/// Displays a ranking as a chart.
pub trait Presenter {
    fn render(&mut self, ranking: &[RankingEntry], kind: ChartKind) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    /// Menu selector: `1` is a bar chart, `2` a pie chart.
    pub fn from_selector(input: &str) -> Option<Self> {
        match input.trim().parse::<i64>() {
            Ok(1) => Some(ChartKind::Bar),
            Ok(2) => Some(ChartKind::Pie),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no file was selected")]
    NoFileSelected,

    #[error("failed to load data")]
    Load(#[from] LoadError),

    #[error("console I/O failed")]
    Io(#[from] io::Error),

    #[error("chart rendering failed")]
    Render(#[source] anyhow::Error),
}

/// What one run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOutcome {
    /// Number of records that passed the filters.
    pub matched: usize,
    pub ranking: Vec<RankingEntry>,
    /// Chart that was handed to the presenter, if any.
    pub rendered: Option<ChartKind>,
}

// ---------------------------------------------------------------------------
// Console session
// ---------------------------------------------------------------------------

/// Straight-line console flow: pick file → load → prompt filters → rank →
/// optionally chart.
pub struct Session<R, W> {
    input: R,
    output: W,
    config: QueryConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: QueryConfig) -> Self {
        Self {
            input,
            output,
            config,
        }
    }

    pub fn run(
        &mut self,
        selector: &mut dyn FileSelector,
        presenter: &mut dyn Presenter,
    ) -> Result<QueryOutcome, SessionError> {
        let path = selector.select().ok_or(SessionError::NoFileSelected)?;
        let dataset = loader::load_file(&path)?;
        writeln!(self.output, "Data loaded: {} records.", dataset.len())?;

        let filters = self.prompt_filters(&dataset)?;
        let filtered = filter::filter(&dataset, &filters);
        if filtered.is_empty() {
            log::info!("no records matched the filters");
        }
        let ranking = rank::top_n(&filtered, &self.config.group_field, self.config.top_n);

        writeln!(
            self.output,
            "Top {} {} values by record count:",
            self.config.top_n, self.config.group_field
        )?;
        for entry in &ranking {
            writeln!(self.output, "{entry}")?;
        }

        let mut outcome = QueryOutcome {
            matched: filtered.len(),
            ranking,
            rendered: None,
        };

        if !self.ask_yes_no("Show the result as a chart? (y/N): ")? {
            return Ok(outcome);
        }

        writeln!(self.output, "Select the chart type (1 - Bar, 2 - Pie): ")?;
        let choice = self.read_line()?.unwrap_or_default();
        let Some(kind) = ChartKind::from_selector(&choice) else {
            log::warn!("rejected chart selector {choice:?}");
            writeln!(self.output, "Invalid chart type.")?;
            return Ok(outcome);
        };

        self.output.flush()?;
        presenter
            .render(&outcome.ranking, kind)
            .map_err(SessionError::Render)?;
        outcome.rendered = Some(kind);
        Ok(outcome)
    }

    /// Prompt for each filter column in order, listing the values on offer.
    fn prompt_filters(&mut self, dataset: &Dataset) -> Result<FilterSet, SessionError> {
        writeln!(self.output, "Select filters:")?;

        let mut filters: FilterSet = self.config.filter_fields.clone().map(FieldFilter::any);
        for filter in filters.iter_mut() {
            let field = &filter.field;
            writeln!(self.output, "Available values for {field}:")?;
            for value in dataset.distinct_values(field) {
                writeln!(self.output, "  {value}")?;
            }
            writeln!(
                self.output,
                "Enter a value for {field} (or press Enter to skip):"
            )?;
            let answer = self.read_line()?.unwrap_or_default();
            filter.criterion = Criterion::from_input(&answer);
        }
        Ok(filters)
    }

    fn ask_yes_no(&mut self, question: &str) -> Result<bool, SessionError> {
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let answer = self.read_line()?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes" | "s" | "si" | "sí"
        ))
    }

    /// Next input line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use anyhow::Context;
    use tempfile::NamedTempFile;

    use super::*;

    struct FixedPath(Option<PathBuf>);

    impl FileSelector for FixedPath {
        fn select(&mut self) -> Option<PathBuf> {
            self.0.take()
        }
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(Vec<RankingEntry>, ChartKind)>,
    }

    impl Presenter for Recorder {
        fn render(&mut self, ranking: &[RankingEntry], kind: ChartKind) -> anyhow::Result<()> {
            self.calls.push((ranking.to_vec(), kind));
            Ok(())
        }
    }

    struct Broken;

    impl Presenter for Broken {
        fn render(&mut self, _: &[RankingEntry], _: ChartKind) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("no display")).context("opening chart window")
        }
    }

    fn csv_file() -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        write!(
            file,
            "Ciudad,Genero,Edad,Condicion\n\
             Quito,F,30,Asma\n\
             Quito,M,40,Ninguna\n\
             Guayaquil,F,22,Asma\n"
        )
        .expect("write csv");
        file
    }

    fn config() -> QueryConfig {
        QueryConfig {
            filter_fields: [
                "Ciudad".to_string(),
                "Genero".to_string(),
                "Edad".to_string(),
                "Condicion".to_string(),
            ],
            ..QueryConfig::default()
        }
    }

    fn run(
        file: &NamedTempFile,
        input: &str,
        presenter: &mut dyn Presenter,
    ) -> (Result<QueryOutcome, SessionError>, String) {
        let mut output = Vec::new();
        let result = {
            let mut session = Session::new(Cursor::new(input.as_bytes()), &mut output, config());
            session.run(&mut FixedPath(Some(file.path().to_path_buf())), presenter)
        };
        (result, String::from_utf8(output).expect("utf8 output"))
    }

    #[test]
    fn unconstrained_query_ranks_all_cities() {
        let file = csv_file();
        let mut presenter = Recorder::default();
        let (result, output) = run(&file, "\n\n\n\nn\n", &mut presenter);

        let outcome = result.expect("session");
        assert_eq!(outcome.matched, 3);
        assert_eq!(
            outcome.ranking,
            vec![RankingEntry::new("Quito", 2), RankingEntry::new("Guayaquil", 1)]
        );
        assert_eq!(outcome.rendered, None);
        assert!(presenter.calls.is_empty());
        assert!(output.contains("Quito: 2\nGuayaquil: 1\n"));
    }

    #[test]
    fn lists_available_values_before_each_prompt() {
        let file = csv_file();
        let (_, output) = run(&file, "", &mut Recorder::default());

        assert!(output.contains("Available values for Ciudad:\n  Guayaquil\n  Quito\n"));
        assert!(output.contains("Available values for Condicion:\n  Asma\n  Ninguna\n"));
    }

    #[test]
    fn entered_values_constrain_the_query() {
        let file = csv_file();
        let (result, _) = run(&file, "\nF\n\nAsma\n", &mut Recorder::default());

        let outcome = result.expect("session");
        assert_eq!(outcome.matched, 2);
        assert_eq!(
            outcome.ranking,
            vec![RankingEntry::new("Quito", 1), RankingEntry::new("Guayaquil", 1)]
        );
    }

    #[test]
    fn pie_selection_is_forwarded_to_presenter() {
        let file = csv_file();
        let mut presenter = Recorder::default();
        let (result, _) = run(&file, "Quito\n\n\n\nS\n2\n", &mut presenter);

        let outcome = result.expect("session");
        assert_eq!(outcome.rendered, Some(ChartKind::Pie));
        assert_eq!(
            presenter.calls,
            vec![(vec![RankingEntry::new("Quito", 2)], ChartKind::Pie)]
        );
    }

    #[test]
    fn invalid_chart_type_is_reported_not_rendered() {
        let file = csv_file();
        let mut presenter = Recorder::default();
        let (result, output) = run(&file, "\n\n\n\ny\n3\n", &mut presenter);

        assert_eq!(result.expect("session").rendered, None);
        assert!(presenter.calls.is_empty());
        assert!(output.contains("Invalid chart type."));
    }

    #[test]
    fn render_failure_is_an_error() {
        let file = csv_file();
        let (result, _) = run(&file, "\n\n\n\ny\n1\n", &mut Broken);

        let err = result.unwrap_err();
        assert!(matches!(err, SessionError::Render(_)));

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(
            chain,
            "chart rendering failed: opening chart window: no display"
        );
    }

    #[test]
    fn cancelled_selection_stops_before_loading() {
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(&b""[..]), &mut output, config());
        let result = session.run(&mut FixedPath(None), &mut Recorder::default());

        assert!(matches!(result, Err(SessionError::NoFileSelected)));
    }

    #[test]
    fn load_failure_is_surfaced() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut output = Vec::new();
        let mut session = Session::new(Cursor::new(&b""[..]), &mut output, config());
        let mut selector = FixedPath(Some(dir.path().join("missing.csv")));
        let result = session.run(&mut selector, &mut Recorder::default());

        assert!(matches!(
            result,
            Err(SessionError::Load(LoadError::Open { .. }))
        ));
    }

    #[test]
    fn chart_selector_parsing() {
        assert_eq!(ChartKind::from_selector("1"), Some(ChartKind::Bar));
        assert_eq!(ChartKind::from_selector(" 2 "), Some(ChartKind::Pie));
        assert_eq!(ChartKind::from_selector("0"), None);
        assert_eq!(ChartKind::from_selector("pie"), None);
    }
}
