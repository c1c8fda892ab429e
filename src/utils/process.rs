use std::ffi::OsStr;
use std::process::{Command, Stdio};
use log::{debug, error};
use crate::service::error::ConvertError;

/// 執行外部工具並等待結束，非零結束碼時回傳 stderr 內容
pub fn run_tool<I, S>(tool: &str, args: I) -> Result<(), ConvertError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let args: Vec<S> = args.into_iter().collect();
    debug!(
        "執行外部工具：{} {}",
        tool,
        args.iter()
            .map(|a| a.as_ref().to_string_lossy().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );

    let output = Command::new(tool)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| ConvertError::ToolLaunch {
            tool: tool.to_string(),
            source: e,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        error!("外部工具 {} 執行失敗：{}", tool, output.status);
        return Err(ConvertError::ToolFailed {
            tool: tool.to_string(),
            status: output.status.to_string(),
            stderr,
        });
    }
    Ok(())
}
