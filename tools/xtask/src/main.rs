//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `anim-check`: 检查生成的动画目录（数量、文件名、内容）

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use pipe_anim::{SIDE_CONFIG_COUNT, SideConfig};
use walkdir::WalkDir;
use xshell::{Shell, cmd};

/// 默认动画目录（相对于 mod 工程根目录）
const DEFAULT_ANIM_DIR: &str = "src/main/resources/Common/Blocks/Animations/ItemPipes";

const FILE_PREFIX: &str = "HytaleIndustries_ItemPipe_State_";
const FILE_EXTENSION: &str = "blockyanim";

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());

    match sub.as_str() {
        "check-all" => check_all()?,
        "anim-check" => {
            let dir = args
                .next()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ANIM_DIR));
            anim_check(&dir)?;
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        other => anyhow::bail!("unknown xtask subcommand: {other}"),
    }

    Ok(())
}

fn check_all() -> anyhow::Result<()> {
    let sh = Shell::new()?;

    eprintln!("\n==> cargo fmt --all -- --check");
    cmd!(sh, "cargo fmt --all -- --check").run()?;

    eprintln!("\n==> cargo clippy --workspace --all-targets");
    cmd!(sh, "cargo clippy --workspace --all-targets").run()?;

    eprintln!("\n==> cargo test --workspace");
    cmd!(sh, "cargo test --workspace").run()?;

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all       运行 fmt、clippy、test 门禁检查
  anim-check      检查生成的动画目录

ANIM-CHECK:
  cargo xtask anim-check [dir]

  不带参数：检查 {DEFAULT_ANIM_DIR}
  带路径参数：检查指定目录

  检查内容：
    - 文件数量是否为 {SIDE_CONFIG_COUNT}
    - 文件名编号是否为合法的 sideConfig 编码
    - 文件内容是否为 formatVersion = 1 的动画文档
"#
    );
}

//=============================================================================
// anim-check 命令实现
//=============================================================================

/// 从文件名解析 sideConfig 编码
///
/// 编号必须是规范写法（至少 3 位，不多余补零），否则返回 None。
fn parse_file_name(name: &str) -> Option<u32> {
    let raw = name
        .strip_prefix(FILE_PREFIX)?
        .strip_suffix(FILE_EXTENSION)?
        .strip_suffix('.')?;
    let value: u32 = raw.parse().ok()?;
    (format!("{value:03}") == raw).then_some(value)
}

/// 检查单个动画文件，返回发现的问题
fn check_anim_file(path: &Path, name: &str) -> Vec<String> {
    let mut problems = Vec::new();

    match parse_file_name(name).map(SideConfig::try_decode) {
        Some(Ok(config)) if config.animation_file_name() == name => {}
        Some(Ok(_)) | None => problems.push(format!("{name}: 文件名不是规范的 sideConfig 编码")),
        Some(Err(e)) => problems.push(format!("{name}: {e}")),
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            problems.push(format!("{name}: 无法读取文件 - {e}"));
            return problems;
        }
    };
    match serde_json::from_str::<serde_json::Value>(&content) {
        Ok(doc) => {
            if doc["formatVersion"] != 1 {
                problems.push(format!("{name}: formatVersion 不为 1"));
            }
            if !doc["nodeAnimations"].is_object() {
                problems.push(format!("{name}: 缺少 nodeAnimations"));
            }
        }
        Err(e) => problems.push(format!("{name}: 解析失败 - {e}")),
    }

    problems
}

/// 执行动画目录检查
fn anim_check(dir: &Path) -> anyhow::Result<()> {
    if !dir.is_dir() {
        anyhow::bail!("动画目录不存在: {}", dir.display());
    }

    let mut names = BTreeSet::new();
    let mut problems = Vec::new();

    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file()
            || path.extension().is_none_or(|ext| ext != FILE_EXTENSION)
        {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        problems.extend(check_anim_file(path, &name));
        names.insert(name);
    }

    eprintln!("─────────────────────────────────────────────────────");
    eprintln!("检查完成: {} 个动画文件", names.len());

    if names.len() != SIDE_CONFIG_COUNT {
        problems.push(format!(
            "文件数量为 {}，期望 {}",
            names.len(),
            SIDE_CONFIG_COUNT
        ));
    }

    if problems.is_empty() {
        eprintln!("✅ 检查通过，无错误");
        return Ok(());
    }

    for problem in &problems {
        eprintln!("[ERROR] {problem}");
    }
    anyhow::bail!("动画检查发现 {} 个问题", problems.len())
}
