//! Report export: CSV, JSON, Markdown, and HTML renderings of a completed
//! audit, plus the console summary.

use crate::audit::AuditReport;
use crate::classify::ControlType;
use anyhow::Result;
use askama::Template;
use chrono::Utc;
use csv::Writer;
use std::fs::File;
use std::io::Write;
use tracing::{debug, info};

/// File extension for a given output format name.
pub fn extension_for_format(format: &str) -> &'static str {
    match format {
        "csv" => "csv",
        "json" => "json",
        "markdown" => "md",
        _ => "html",
    }
}

pub fn export_csv(report: &AuditReport, output_path: &str) -> Result<()> {
    debug!("Exporting audit report to CSV: {}", output_path);

    let file = File::create(output_path)?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record([
        "Section",
        "Query",
        "Control Category",
        "Title",
        "Link",
        "Snippet",
    ])?;

    for section in &report.sections {
        for result in &section.results {
            wtr.write_record([
                section.label.as_str(),
                section.query.as_str(),
                result.control_type.label(),
                result.title.as_str(),
                result.link.as_str(),
                result.snippet.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    info!("Successfully exported audit report to CSV: {}", output_path);

    Ok(())
}

pub fn export_json(report: &AuditReport, output_path: &str) -> Result<()> {
    debug!("Exporting audit report to JSON: {}", output_path);

    let json_output = JsonExport {
        summary: ExportSummary {
            company: report.company.clone(),
            website: report.website.clone(),
            total_results: report.sections.iter().map(|s| s.results.len()).sum(),
            sections: report.sections.len(),
            generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        },
        report: report.clone(),
    };

    let json_string = serde_json::to_string_pretty(&json_output)?;

    let mut file = File::create(output_path)?;
    file.write_all(json_string.as_bytes())?;

    info!("Successfully exported audit report to JSON: {}", output_path);

    Ok(())
}

#[derive(serde::Serialize)]
struct JsonExport {
    summary: ExportSummary,
    report: AuditReport,
}

#[derive(serde::Serialize)]
struct ExportSummary {
    company: String,
    website: String,
    total_results: usize,
    sections: usize,
    generated_at: String,
}

pub fn export_markdown(report: &AuditReport, output_path: &str) -> Result<()> {
    debug!("Exporting audit report to Markdown: {}", output_path);

    let mut content = String::new();

    content.push_str("# Brand Audit Report\n\n");
    content.push_str(&format!("**Company:** {}\n", report.company));
    content.push_str(&format!("**Website:** {}\n\n", report.website));
    content.push_str(&format!(
        "*Generated on: {}*\n\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    ));

    for section in &report.sections {
        content.push_str(&format!("## {}\n\n", section.label));
        content.push_str(&format!("**Query:** `{}`\n\n", escape_markdown(&section.query)));
        content.push_str(&format!("**Results analyzed:** {}\n\n", section.results.len()));

        content.push_str("| Category | Count | Share |\n");
        content.push_str("|----------|-------|-------|\n");
        for category in ControlType::ALL {
            content.push_str(&format!(
                "| {} | {} | {}% |\n",
                category.label(),
                section.breakdown.count(category),
                section.breakdown.percentage(category)
            ));
        }
        content.push('\n');

        if !section.results.is_empty() {
            content.push_str("| Listing | Category |\n");
            content.push_str("|---------|----------|\n");
            for result in &section.results {
                content.push_str(&format!(
                    "| [{}]({}) | {} |\n",
                    escape_markdown(&result.title),
                    result.link,
                    result.control_type.label()
                ));
            }
            content.push('\n');
        }
    }

    std::fs::write(output_path, content)?;
    info!("Successfully exported audit report to Markdown: {}", output_path);

    Ok(())
}

fn escape_markdown(text: &str) -> String {
    text.replace('|', "\\|").replace('*', "\\*").replace('_', "\\_")
}

#[derive(Template)]
#[template(path = "report.html")]
struct HtmlReportTemplate {
    summary: HtmlSummary,
    sections: Vec<HtmlSection>,
}

struct HtmlSummary {
    company: String,
    website: String,
    total_results: usize,
    generated_at: String,
}

struct HtmlSection {
    label: String,
    query: String,
    total: usize,
    categories: Vec<HtmlCategoryRow>,
    results: Vec<HtmlResultRow>,
}

struct HtmlCategoryRow {
    label: &'static str,
    css_class: &'static str,
    count: usize,
    percentage: u32,
}

struct HtmlResultRow {
    title: String,
    link: String,
    snippet: String,
    category_label: &'static str,
    category_class: &'static str,
}

fn category_css_class(category: ControlType) -> &'static str {
    match category {
        ControlType::FullControl => "full-control",
        ControlType::PartialControl => "partial-control",
        ControlType::NoControl => "no-control",
        ControlType::MissedOpportunity => "missed-opportunity",
    }
}

/// Render the report as a standalone HTML document. The same rendering is
/// written to disk by [`export_html`] and attached to the notification
/// email.
pub fn render_html(report: &AuditReport) -> Result<String> {
    let sections = report
        .sections
        .iter()
        .map(|section| HtmlSection {
            label: section.label.clone(),
            query: section.query.clone(),
            total: section.results.len(),
            categories: ControlType::ALL
                .iter()
                .map(|category| HtmlCategoryRow {
                    label: category.label(),
                    css_class: category_css_class(*category),
                    count: section.breakdown.count(*category),
                    percentage: section.breakdown.percentage(*category),
                })
                .collect(),
            results: section
                .results
                .iter()
                .map(|result| HtmlResultRow {
                    title: result.title.clone(),
                    link: result.link.clone(),
                    snippet: result.snippet.clone(),
                    category_label: result.control_type.label(),
                    category_class: category_css_class(result.control_type),
                })
                .collect(),
        })
        .collect();

    let template = HtmlReportTemplate {
        summary: HtmlSummary {
            company: report.company.clone(),
            website: report.website.clone(),
            total_results: report.sections.iter().map(|s| s.results.len()).sum(),
            generated_at: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        },
        sections,
    };

    Ok(template.render()?)
}

pub fn export_html(report: &AuditReport, output_path: &str) -> Result<()> {
    debug!("Exporting audit report to HTML: {}", output_path);

    let html_content = render_html(report)?;
    std::fs::write(output_path, html_content)?;

    info!("Successfully exported audit report to HTML: {}", output_path);

    Ok(())
}

/// Print the per-section breakdown to the console.
pub fn print_audit_summary(report: &AuditReport) {
    println!("\n=== Brand Audit Summary: {} ===", report.company);

    for section in &report.sections {
        println!("\n{} (\"{}\")", section.label, section.query);
        println!("  Results analyzed: {}", section.results.len());
        for category in ControlType::ALL {
            println!(
                "  {:<20} {:>3}  ({}%)",
                category.label(),
                section.breakdown.count(category),
                section.breakdown.percentage(category)
            );
        }
    }

    println!("\n==============================\n");
}
