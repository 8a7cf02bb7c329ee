// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, Environment, File, Map};
use serde::Deserialize;

/// 应用程序配置设置
///
/// 包含服务器、日志、指标、出站 HTTP 以及各搜索提供方的配置项
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// 服务器配置
    pub server: ServerSettings,
    /// 日志配置
    #[serde(default)]
    pub logging: LoggingSettings,
    /// 指标配置
    #[serde(default)]
    pub metrics: MetricsSettings,
    /// 出站 HTTP 配置
    #[serde(default)]
    pub http: HttpSettings,
    /// Google Custom Search 配置
    #[serde(default)]
    pub google_search: GoogleSearchSettings,
    /// DuckDuckGo 配置
    #[serde(default)]
    pub duckduckgo: DuckDuckGoSettings,
    /// AI 搜索配置
    #[serde(default)]
    pub ai_search: AiSearchSettings,
}

/// 服务器配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// 服务器监听主机地址
    pub host: String,
    /// 服务器监听端口
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// 日志配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    /// 输出格式 (pretty, json)
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: "pretty".to_string(),
        }
    }
}

impl LoggingSettings {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

/// 指标配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct MetricsSettings {
    /// 是否启动 Prometheus 导出器
    pub enabled: bool,
    /// 导出器监听端口
    pub port: u16,
}

impl Default for MetricsSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            port: 9000,
        }
    }
}

/// 出站 HTTP 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// 请求超时时间（秒），未设置时使用传输层默认值
    pub timeout_secs: Option<u64>,
    /// User-Agent
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Google Custom Search 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleSearchSettings {
    /// API 密钥
    pub api_key: Option<String>,
    /// 搜索引擎 ID (cx)
    pub search_engine_id: Option<String>,
    /// 搜索接口地址
    pub endpoint: String,
    /// 图标服务地址
    pub favicon_endpoint: String,
}

impl Default for GoogleSearchSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            search_engine_id: None,
            endpoint: "https://www.googleapis.com/customsearch/v1".to_string(),
            favicon_endpoint: "https://www.google.com/s2/favicons".to_string(),
        }
    }
}

impl GoogleSearchSettings {
    /// 两项凭据都存在且非空时返回 `(api_key, search_engine_id)`
    pub fn credentials(&self) -> Option<(&str, &str)> {
        let key = self.api_key.as_deref().filter(|v| !v.is_empty())?;
        let cx = self.search_engine_id.as_deref().filter(|v| !v.is_empty())?;
        Some((key, cx))
    }
}

/// DuckDuckGo 配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct DuckDuckGoSettings {
    /// instant answer 接口地址
    pub endpoint: String,
}

impl Default for DuckDuckGoSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.duckduckgo.com/".to_string(),
        }
    }
}

/// AI 搜索配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct AiSearchSettings {
    /// 函数调用服务的基础地址，未设置时主路由总是返回 500
    pub base_url: Option<String>,
    /// Bearer 令牌
    pub api_key: Option<String>,
    /// 调用的函数名
    pub function_name: String,
    /// 请求的结果数
    pub result_count: u32,
}

impl Default for AiSearchSettings {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            function_name: "web_search".to_string(),
            result_count: 10,
        }
    }
}

fn default_user_agent() -> String {
    format!("foxseek/{}", env!("CARGO_PKG_VERSION"))
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}`、
    /// `FOXSEEK__*` 环境变量，最后由 `GOOGLE_SEARCH_API_KEY` /
    /// `GOOGLE_SEARCH_ENGINE_ID` 覆盖 Google 凭据
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars().collect())
    }

    /// 使用给定的环境变量集合加载配置，不读取进程环境
    pub fn from_vars(vars: Map<String, String>) -> Result<Self, ConfigError> {
        let env = vars
            .get("APP_ENVIRONMENT")
            .cloned()
            .unwrap_or_else(|| "default".to_string());
        let builder = Config::builder()
            // Start with default settings
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("logging.format", "pretty")?
            .set_default("metrics.enabled", false)?
            .set_default("metrics.port", 9000)?
            .set_default("http.user_agent", default_user_agent())?
            .set_default(
                "google_search.endpoint",
                "https://www.googleapis.com/customsearch/v1",
            )?
            .set_default(
                "google_search.favicon_endpoint",
                "https://www.google.com/s2/favicons",
            )?
            .set_default("duckduckgo.endpoint", "https://api.duckduckgo.com/")?
            .set_default("ai_search.function_name", "web_search")?
            .set_default("ai_search.result_count", 10)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("FOXSEEK")
                    .separator("__")
                    .source(Some(vars.clone())),
            )
            // Legacy credential variables
            .set_override_option(
                "google_search.api_key",
                vars.get("GOOGLE_SEARCH_API_KEY").cloned(),
            )?
            .set_override_option(
                "google_search.search_engine_id",
                vars.get("GOOGLE_SEARCH_ENGINE_ID").cloned(),
            )?;

        builder.build()?.try_deserialize()
    }
}
