//! Google Sheets `values.get` table source.

use async_trait::async_trait;
use reqwest::{Client, Url};

use asset_manager_core::ingest::{SourceError, TableSource, parse_value_range};
use asset_manager_core::table::Grid;
use asset_manager_shared::AppError;
use asset_manager_shared::config::SheetConfig;

const SHEETS_API: &str = "https://sheets.googleapis.com/v4/spreadsheets";

/// Reads a range of a spreadsheet with a bearer token.
///
/// Obtaining the token is left to the caller.
#[derive(Debug, Clone)]
pub struct SheetsSource {
    client: Client,
    url: Url,
    access_token: String,
}

impl SheetsSource {
    /// Creates a source from the `sheet` configuration section.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Configuration` when the spreadsheet id or access
    /// token is missing.
    pub fn from_config(config: &SheetConfig) -> Result<Self, AppError> {
        if config.spreadsheet_id.is_empty() {
            return Err(AppError::Configuration(
                "sheet.spreadsheet_id is not set".to_string(),
            ));
        }
        let access_token = config
            .access_token
            .clone()
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::Configuration("sheet.access_token is not set".to_string()))?;

        Ok(Self {
            client: Client::new(),
            url: values_url(&config.spreadsheet_id, &config.range)?,
            access_token,
        })
    }
}

/// Builds `{api}/{id}/values/{range}`, percent-encoding each segment.
fn values_url(spreadsheet_id: &str, range: &str) -> Result<Url, AppError> {
    let mut url = Url::parse(SHEETS_API).map_err(|e| AppError::Internal(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| AppError::Internal("spreadsheet API URL cannot have segments".to_string()))?
        .extend([spreadsheet_id, "values", range]);
    Ok(url)
}

#[async_trait]
impl TableSource for SheetsSource {
    async fn fetch_grid(&self) -> Result<Grid, SourceError> {
        let response = self
            .client
            .get(self.url.clone())
            .bearer_auth(&self.access_token)
            .send()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Http(e.to_string()))?;
        if !status.is_success() {
            return Err(SourceError::Http(format!("{status}: {body}")));
        }

        parse_value_range(&body)
    }
}
