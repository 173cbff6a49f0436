//! # Output 模块
//!
//! 把全部 sideConfig 组合的动画写入输出目录。
//!
//! 文件名由编码值决定，互不冲突；重复运行会覆盖为完全相同的内容。
//! 任何 IO 错误立即中止，不做重试或部分成功汇报。

use crate::animation::{make_animation, render_document};
use crate::error::{AnimError, AnimResult};
use crate::model::BlockyModel;
use crate::side_config::{SideConfig, all_side_configs};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// 批量生成结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// 写出的文件数
    pub written: usize,
    /// 输出目录
    pub output_dir: PathBuf,
}

/// 写出单个组合的动画，返回文件路径
pub fn write_animation(
    config: &SideConfig,
    model: &BlockyModel,
    output_dir: &Path,
) -> AnimResult<PathBuf> {
    let document = make_animation(config, model);
    let text = render_document(&document)?;
    let path = output_dir.join(config.animation_file_name());

    fs::write(&path, text).map_err(|source| AnimError::WriteOutput {
        path: path.clone(),
        source,
    })?;
    debug!(
        raw = config.encode(),
        nodes = document.node_animations.len(),
        file = %path.display(),
        "写入动画"
    );
    Ok(path)
}

/// 写出全部 729 个组合的动画
pub fn write_all_animations(
    model: &BlockyModel,
    output_dir: impl AsRef<Path>,
) -> AnimResult<GenerationReport> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir).map_err(|source| AnimError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;
    info!(output_dir = %output_dir.display(), "开始生成动画");

    let mut written = 0;
    for config in all_side_configs() {
        write_animation(&config, model, output_dir)?;
        written += 1;
    }

    Ok(GenerationReport {
        written,
        output_dir: output_dir.to_path_buf(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Direction;
    use crate::model::ModelNode;
    use crate::side_config::State;

    #[test]
    fn test_write_single_animation() {
        let dir = tempfile::tempdir().unwrap();
        let model = BlockyModel::new(vec![ModelNode::named("North_Bars", Vec::new())]);
        let config = SideConfig::default().with(Direction::South, State::Extract);

        let path = write_animation(&config, &model, dir.path()).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "HytaleIndustries_ItemPipe_State_004.blockyanim"
        );

        let content = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(
            value["nodeAnimations"]["North_Bars"]["shapeStretch"][0]["delta"]["x"],
            1
        );
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = write_animation(&SideConfig::default(), &BlockyModel::default(), &missing)
            .unwrap_err();
        assert!(matches!(err, AnimError::WriteOutput { .. }));
    }

    #[test]
    fn test_output_dir_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, "x").unwrap();
        let err = write_all_animations(&BlockyModel::default(), &file).unwrap_err();
        assert!(matches!(err, AnimError::CreateOutputDir { .. }));
    }
}
