//! Statistics reporting.

use console::style;

use crate::export::ExportStats;

/// Print statistics for a finished export.
pub fn print_export_stats(course_id: &str, stats: &ExportStats) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!(
        "{}",
        style(format!("Export of course {} complete:", course_id)).bold()
    );
    println!("  Modules:     {}", stats.modules);
    println!("  Pages:       {}", stats.pages);
    println!("  Assignments: {}", stats.assignments);
    println!("  Files:       {} downloaded", stats.files_downloaded);
    if stats.skipped > 0 {
        println!("  Skipped:     {}", style(stats.skipped).yellow());
    }
    println!("{}", style("═".repeat(50)).dim());
}
