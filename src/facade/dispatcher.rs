use std::io;
use std::path::Path;
use std::sync::Arc;
use log::{error, info};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use crate::models::capability::{Capability, CapabilityTable};
use crate::models::conversion::{output_path_for, ConversionJob, ConversionRequest};
use crate::models::format::TargetFormat;
use crate::service::traits::i_service::CollaboratorServiceTrait;
use crate::utils::utils::{ConsoleOutput, WaitSpinner};

pub const UNSUPPORTED_MESSAGE: &str = "Unsupported format or conversion not available.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Started(Capability),
    Unsupported,
}

/// 轉換分派器：查表後在背景執行協作者，不等待完成
pub struct Dispatcher {
    table: CapabilityTable,
    collaborator: Arc<dyn CollaboratorServiceTrait>,
    runtime: Handle,
    console: ConsoleOutput,
    pending: Vec<(Capability, JoinHandle<()>)>,
}

impl Dispatcher {
    pub fn new(
        collaborator: Arc<dyn CollaboratorServiceTrait>,
        runtime: Handle,
        console: ConsoleOutput,
    ) -> Self {
        Dispatcher {
            table: CapabilityTable::new(),
            collaborator,
            runtime,
            console,
            pending: Vec::new(),
        }
    }

    pub fn dispatch(
        &mut self,
        source_format: &str,
        target_format: TargetFormat,
        path: &Path,
    ) -> io::Result<DispatchOutcome> {
        self.dispatch_request(ConversionRequest {
            source_format: source_format.to_string(),
            target_format,
            file_path: path.to_path_buf(),
        })
    }

    pub fn dispatch_request(&mut self, request: ConversionRequest) -> io::Result<DispatchOutcome> {
        let capability = match self.table.lookup(&request.source_format, request.target_format) {
            Some(capability) => capability,
            None => {
                info!(
                    "不支援的轉換：{} -> {}，檔案：{}",
                    request.source_format,
                    request.target_format,
                    request.file_path.display()
                );
                self.console.println(UNSUPPORTED_MESSAGE)?;
                return Ok(DispatchOutcome::Unsupported);
            }
        };

        let output_path = capability
            .writes_output()
            .then(|| output_path_for(&request.file_path, request.target_format));
        let job = ConversionJob {
            capability,
            input_path: request.file_path,
            output_path,
        };
        info!(
            "開始背景轉換 {:?}：{} -> {}",
            capability,
            job.input_path.display(),
            job.output_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "終端".to_string())
        );

        let collaborator = Arc::clone(&self.collaborator);
        let console = self.console.clone();
        let handle = self.runtime.spawn_blocking(move || {
            let line = match collaborator.execute(&job) {
                Ok(message) => {
                    info!("轉換完成 {:?}：{}", job.capability, job.input_path.display());
                    message
                }
                Err(e) => {
                    error!("轉換失敗 {:?}：{}，錯誤：{}", job.capability, job.input_path.display(), e);
                    format!("{}: {}", job.capability.failure_label(), e)
                }
            };
            if let Err(e) = console.println(&line) {
                error!("終端輸出失敗：{}", e);
            }
        });
        self.pending.push((capability, handle));
        Ok(DispatchOutcome::Started(capability))
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// 等待所有背景轉換結束，僅在程式結束前呼叫
    pub fn wait_all(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let pending: Vec<_> = self.pending.drain(..).collect();
        let total = pending.len();
        let spinner = WaitSpinner::new(total);
        let console = self.console.clone();

        self.runtime.block_on(async {
            for (done, (capability, handle)) in pending.into_iter().enumerate() {
                if let Err(e) = handle.await {
                    error!("背景轉換異常結束 {:?}：{}", capability, e);
                    if let Err(e) = console.println(&format!("{}: {}", capability.failure_label(), e)) {
                        error!("終端輸出失敗：{}", e);
                    }
                }
                spinner.update(total - done - 1);
            }
        });
        spinner.finish();
        info!("所有背景轉換已結束，共 {} 個", total);
    }
}
