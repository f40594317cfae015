// ==========================================
// 一年级班级名册统计 - 命令行入口
// ==========================================
// 用法:
//   roster-stats <名册文件.xlsx|.csv> [输出文件.xlsx] [配置文件.json]
//
// 外壳只负责: 读取输入 → 调用核心管道 → 显示结果 / 缺陷 → 保存导出文件
// ==========================================

use anyhow::Context;
use roster_stats::api::{ApiError, RosterStatsApi};
use roster_stats::config::ConfigManager;
use roster_stats::domain::{RosterTable, StatisticsTable};
use std::path::PathBuf;
use std::process::ExitCode;

/// 数据预览行数
const PREVIEW_ROWS: usize = 10;

fn main() -> ExitCode {
    roster_stats::logging::init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    let mut args = std::env::args().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        print_usage();
        return Ok(ExitCode::from(2));
    };
    let output = args.next().map(PathBuf::from);
    let config_path = args.next().map(PathBuf::from);

    let config = ConfigManager::load_or_default(config_path.as_deref())
        .context("无法加载配置")?
        .export_config()
        .clone();
    let output = output.unwrap_or_else(|| PathBuf::from(&config.download_file_name));

    tracing::info!("{} v{}", roster_stats::APP_NAME, roster_stats::VERSION);
    tracing::info!(input = %input.display(), "读取名册");

    let api = RosterStatsApi::new(config);
    let table = api.load_roster_file(&input)?;

    println!("✅ Το αρχείο φορτώθηκε επιτυχώς!");
    print_preview(&table);

    let overview = api.overview(&table);
    println!(
        "Συνολικά μαθητές: {} | Τμήματα: {}",
        overview.student_count, overview.classroom_count
    );
    println!();

    let statistics = match api.generate_statistics(&table) {
        Ok(statistics) => statistics,
        Err(err @ ApiError::ValidationFailed { .. }) => {
            eprintln!("❌ Σφάλμα στη δομή του αρχείου:");
            for message in err.user_messages() {
                eprintln!("• {}", message);
            }
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err.into()),
    };

    print_statistics(&statistics);

    api.export_statistics_to_file(&statistics, &output)
        .with_context(|| format!("无法写入 {}", output.display()))?;
    println!();
    println!("📥 {}", output.display());

    Ok(ExitCode::SUCCESS)
}

fn print_preview(table: &RosterTable) {
    println!("📊 Προεπισκόπηση Δεδομένων");
    println!("{}", table.headers.join("\t"));
    for row in table.head(PREVIEW_ROWS) {
        let cells: Vec<&str> = table
            .headers
            .iter()
            .map(|h| row.get(h).map_or("", String::as_str))
            .collect();
        println!("{}", cells.join("\t"));
    }
    println!();
}

fn print_statistics(statistics: &StatisticsTable) {
    println!("{}", StatisticsTable::header_labels().join("\t"));
    for row in &statistics.rows {
        let counts: Vec<String> = row.counts().iter().map(|c| c.to_string()).collect();
        println!("{}\t{}", row.classroom, counts.join("\t"));
    }
}

fn print_usage() {
    println!("{} v{}", roster_stats::APP_NAME, roster_stats::VERSION);
    println!();
    println!("用法: roster-stats <名册文件.xlsx|.csv> [输出文件.xlsx] [配置文件.json]");
    println!();
    println!("Απαιτούμενες Στήλες Excel:");
    for column in RosterStatsApi::required_columns() {
        println!("• {}", column);
    }
}
