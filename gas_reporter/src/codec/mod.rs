//!
//! The report comment codec.
//!
//! A report comment is a single-line HTML fragment readable by humans, carrying three anchors
//! addressed by `id` (see [`Anchor`]):
//!
//! - `#gas-report-run-id`, whose text is the run identifier,
//! - `#gas-report-commit`, whose text is the commit identifier,
//! - `#gas-report-table`, a table with a `Contract | Method | Min | Max | Avg` header row,
//!   optionally followed by a `Δ Avg` column, and one row per method.
//!
//! Decoding ignores everything except the anchors and the data columns.
//!

pub mod anchor;
pub mod column;
pub mod error;
pub mod table;


use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis;
use crate::analysis::direction::Direction;
use crate::model::method_result::MethodResult;
use crate::model::run_report::RunReport;

use self::anchor::Anchor;
use self::column::Column;
use self::error::Error as DecodeError;
use self::table::escape;
use self::table::Record;
use self::table::Table;

/// Matches every kind of line break.
static LINE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\r|\n").expect("Always valid"));

///
/// Renders the run as a report comment.
///
/// With `previous`, every row gets the change of the average cost against the same method of the
/// previous run, if the previous run measured it.
///
pub fn encode(run: &RunReport, previous: Option<&RunReport>) -> String {
    let diffs = previous.map(|previous| analysis::compute(run, previous));

    let mut html = String::new();
    html.push_str(r#"<div id="gas-report">"#);
    html.push_str("<h3>Gas usage report</h3>");
    html.push_str(
        format!(
            r#"<p>Run <code id="{}">{}</code> at commit <code id="{}">{}</code>"#,
            Anchor::RunId.id(),
            escape(run.id.as_str()),
            Anchor::Commit.id(),
            escape(run.commit.as_str()),
        )
        .as_str(),
    );
    if let Some(previous) = previous {
        html.push_str(
            format!(
                ", compared to run {} ({})",
                escape(previous.id.as_str()),
                escape(short_commit(previous.commit.as_str())),
            )
            .as_str(),
        );
    }
    html.push_str("</p>");

    html.push_str(format!(r#"<table id="{}"><thead><tr>"#, Anchor::Table.id()).as_str());
    for column in Column::DATA.iter() {
        html.push_str(format!("<th>{}</th>", escape(column.header())).as_str());
    }
    if diffs.is_some() {
        html.push_str(format!("<th>{}</th>", escape(Column::AvgDelta.header())).as_str());
    }
    html.push_str("</tr></thead><tbody>");

    for result in run.data.iter() {
        html.push_str("<tr>");
        html.push_str(format!("<td>{}</td>", escape(result.contract.as_str())).as_str());
        html.push_str(format!("<td>{}</td>", escape(result.method.as_str())).as_str());
        html.push_str(format!("<td>{}</td>", result.min).as_str());
        html.push_str(format!("<td>{}</td>", result.max).as_str());
        html.push_str(format!("<td>{}</td>", result.avg).as_str());
        if let Some(diffs) = diffs.as_ref() {
            let cell = diffs
                .get(&result.key())
                .map(|diff| Direction::render(diff.avg))
                .unwrap_or_default();
            html.push_str(format!("<td>{}</td>", escape(cell.as_str())).as_str());
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></div>");

    LINE_BREAKS.replace_all(html.as_str(), "").into_owned()
}

///
/// Recovers a run from a comment body, or `None` if the comment is not a report.
///
pub fn decode(body: &str) -> Option<RunReport> {
    match try_decode(body) {
        Ok(report) => Some(report),
        Err(error) => {
            tracing::debug!(%error, "comment is not a gas report");
            None
        }
    }
}

///
/// Recovers a run from a comment body.
///
/// The HTML parser recovers from malformed markup, so the only failures are missing anchors and
/// table contents that do not parse back into results.
///
pub fn try_decode(body: &str) -> Result<RunReport, DecodeError> {
    let document = scraper::Html::parse_fragment(body);
    let find = |anchor: Anchor| {
        document
            .select(&anchor.selector())
            .next()
            .ok_or(DecodeError::MissingAnchor(anchor))
    };

    let run_id = find(Anchor::RunId)?.text().collect::<String>();
    let commit = find(Anchor::Commit)?.text().collect::<String>();
    let table = Table::from(find(Anchor::Table)?);
    if let Some(column) = Column::DATA.into_iter().find(|column| !table.has(*column)) {
        return Err(DecodeError::MissingColumn(column));
    }

    let mut report = RunReport::new(run_id.trim(), commit.trim());
    for (index, record) in table.records.iter().enumerate() {
        report.push(result(index, record)?);
    }
    Ok(report)
}

///
/// Parses a table row back into a method result.
///
fn result(row: usize, record: &Record) -> Result<MethodResult, DecodeError> {
    let cell = |column: Column| {
        record
            .get(column)
            .ok_or(DecodeError::MissingCell { row, column })
    };
    let integer = |column: Column| {
        let value = cell(column)?;
        value
            .parse::<u64>()
            .map_err(|error| DecodeError::Integer {
                row,
                column,
                value: value.to_owned(),
                error,
            })
    };

    Ok(MethodResult::new(
        cell(Column::Contract)?,
        cell(Column::Method)?,
        integer(Column::Min)?,
        integer(Column::Max)?,
        integer(Column::Avg)?,
    ))
}

fn short_commit(commit: &str) -> &str {
    commit.get(..7).unwrap_or(commit)
}
