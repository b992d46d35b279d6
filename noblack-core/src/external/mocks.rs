// noblack-core/src/external/mocks.rs

// --- Mocking Infrastructure (for unit tests) ---

use super::ffmpeg_executor::{FfmpegProcess, FfmpegSpawner};
use crate::error::{CoreError, CoreResult};
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::sync::Mutex;

/// Mock implementation of FfmpegProcess.
pub struct MockFfmpegProcess {
    /// Events to emit when handle_events is called.
    pub events_to_emit: Vec<FfmpegEvent>,
    /// Exit status to return when wait is called.
    pub exit_status: ExitStatus,
}

impl FfmpegProcess for MockFfmpegProcess {
    fn handle_events<F>(&mut self, mut handler: F) -> CoreResult<()>
    where
        F: FnMut(FfmpegEvent) -> CoreResult<()>,
    {
        for event in self.events_to_emit.drain(..) {
            handler(event)?;
        }
        Ok(())
    }

    fn wait(&mut self) -> CoreResult<ExitStatus> {
        Ok(self.exit_status)
    }
}

/// Represents an expected ffmpeg command call and its mock result.
pub struct MockFfmpegExpectation {
    pub arg_pattern: String,
    pub result: CoreResult<MockFfmpegProcess>,
    pub create_dummy_output: bool,
}

/// Mock implementation of FfmpegSpawner supporting multiple expectations.
#[derive(Default)]
pub struct MockFfmpegSpawner {
    expectations: Mutex<Vec<MockFfmpegExpectation>>,
    received_calls: Mutex<Vec<Vec<String>>>,
}

impl MockFfmpegSpawner {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add_expectation(
        &self,
        arg_pattern: &str,
        result: CoreResult<MockFfmpegProcess>,
        create_dummy_output: bool,
    ) {
        self.expectations.lock().unwrap().push(MockFfmpegExpectation {
            arg_pattern: arg_pattern.to_string(),
            result,
            create_dummy_output,
        });
    }

    pub fn add_success_expectation(
        &self,
        arg_pattern: &str,
        events: Vec<FfmpegEvent>,
        create_dummy_output: bool,
    ) {
        let process = MockFfmpegProcess {
            events_to_emit: events,
            exit_status: ExitStatus::from_raw(0),
        };
        self.add_expectation(arg_pattern, Ok(process), create_dummy_output);
    }

    pub fn add_spawn_error_expectation(&self, arg_pattern: &str, error: CoreError) {
        self.add_expectation(arg_pattern, Err(error), false);
    }

    /// `exit_code` is the wait status; `1 << 8` is a plain exit code of 1.
    pub fn add_exit_error_expectation(&self, arg_pattern: &str, events: Vec<FfmpegEvent>, exit_code: i32) {
        let process = MockFfmpegProcess {
            events_to_emit: events,
            exit_status: ExitStatus::from_raw(exit_code),
        };
        self.add_expectation(arg_pattern, Ok(process), false);
    }

    pub fn get_received_calls(&self) -> Vec<Vec<String>> {
        self.received_calls.lock().unwrap().clone()
    }
}

impl FfmpegSpawner for MockFfmpegSpawner {
    type Process = MockFfmpegProcess;

    fn spawn(&self, args: &[String]) -> CoreResult<Self::Process> {
        self.received_calls.lock().unwrap().push(args.to_vec());

        let mut expectations = self.expectations.lock().unwrap();
        let found_index = expectations
            .iter()
            .position(|exp| args.iter().any(|arg| arg.contains(&exp.arg_pattern)));

        let Some(index) = found_index else {
            panic!("MockFfmpegSpawner: No expectation found for command args: {args:?}");
        };
        let expectation = expectations.remove(index);
        log::info!("MockFfmpegSpawner: Matched expectation with pattern '{}'", expectation.arg_pattern);

        let process = expectation.result?;
        if expectation.create_dummy_output {
            if let Some(output_path) = args.last().map(std::path::PathBuf::from) {
                if let Some(parent) = output_path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(&output_path, b"mock ffmpeg output")?;
            }
        }
        Ok(process)
    }
}

/// A cropdetect log line as ffmpeg prints it.
pub fn cropdetect_line(width: i64, height: i64, x: i64, y: i64) -> FfmpegEvent {
    FfmpegEvent::Log(
        LogLevel::Info,
        format!(
            "[Parsed_cropdetect_0 @ 0x7f8] x1:{x} x2:{} y1:{y} y2:{} w:{width} h:{height} x:{x} y:{y} pts:0 t:0.000000 crop={width}:{height}:{x}:{y}",
            x + width - 1,
            y + height - 1
        ),
    )
}
