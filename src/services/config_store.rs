// API 连接配置存储
//
// ~/.fincore/config.json 的读写，原子写入

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 后台 API 连接配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// 服务端基地址
    pub base_url: String,
    /// 系统访问令牌
    pub access_token: String,
    /// 操作员用户 ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// 默认存储位置（~/.fincore/config.json）
    pub fn default_location() -> Result<Self> {
        let home_dir = dirs::home_dir().context("无法获取用户主目录")?;
        Ok(Self::new(home_dir.join(".fincore").join("config.json")))
    }

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// 读取配置，文件不存在时返回 None
    pub fn load(&self) -> Result<Option<ApiConfig>> {
        if !self.path.exists() {
            tracing::debug!("配置文件不存在: {}", self.path.display());
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).context("读取配置文件失败")?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let config = serde_json::from_str(&content).context("解析配置文件失败")?;
        Ok(Some(config))
    }

    /// 保存配置，自动创建目录，临时文件替换保证原子性
    pub fn save(&self, config: &ApiConfig) -> Result<()> {
        self.ensure_parent()?;
        let tmp_path = self.tmp_path();
        let content = serde_json::to_string_pretty(config).context("序列化配置失败")?;
        fs::write(&tmp_path, content).context("写入配置文件失败")?;
        self.replace_with_tmp(tmp_path)
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("创建配置目录失败")?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn replace_with_tmp(&self, tmp_path: PathBuf) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path).context("替换旧配置文件失败")?;
        }
        fs::rename(tmp_path, &self.path).context("落盘配置文件失败")?;
        Ok(())
    }
}
