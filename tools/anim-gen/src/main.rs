//! # Anim Gen
//!
//! 物品管道动画生成工具 - 为 3^6 种侧面配置各生成一份 `.blockyanim`。
//!
//! ## 用法
//!
//! ```bash
//! # 在 mod 工程根目录运行（路径相对于工作目录）
//! cargo run -p anim-gen
//!
//! # 或安装后直接使用
//! cargo install --path tools/anim-gen
//! anim-gen
//! ```
//!
//! 不接受任何参数。模型路径与输出目录可在工作目录下的
//! `anim-gen.json` 中覆盖。

mod config;

use anyhow::Context;
use clap::Parser;
use config::{CONFIG_FILE, GeneratorConfig};
use pipe_anim::{BlockyModel, write_all_animations};
use std::process::ExitCode;
use tracing::{Level, info};

#[derive(Parser)]
#[command(name = "anim-gen")]
#[command(about = "物品管道动画生成工具 - 为全部侧面配置生成 blockyanim 文件")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();

    if let Err(e) = real_main() {
        eprintln!("❌ 生成失败: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn real_main() -> anyhow::Result<()> {
    let config = GeneratorConfig::load(CONFIG_FILE);
    init_logging(&config);

    info!(
        model = %config.model_path.display(),
        output = %config.output_dir.display(),
        "配置就绪"
    );

    let model = BlockyModel::load(&config.model_path).context("无法加载管道模型")?;
    let report = write_all_animations(&model, &config.output_dir).context("写出动画失败")?;

    println!(
        "Wrote {} animations to {}",
        report.written,
        report.output_dir.display()
    );
    Ok(())
}

/// 初始化日志（写到 stderr，stdout 只保留结果摘要）
fn init_logging(config: &GeneratorConfig) {
    let level = if config.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}
