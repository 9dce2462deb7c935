//! Test helpers: live sink builders and a recording [`AudioServer`]

use std::collections::BTreeMap;

use color_eyre::eyre::{self, Result};

use crate::pulse::{AudioServer, LiveSink, ServerInfo, SinkInput};

/// Build a live sink with vendor/product/description properties
pub(crate) fn sink(index: u32, vendor: &str, product: &str, desc: &str) -> LiveSink {
    let properties = BTreeMap::from([
        ("device.vendor.id".to_string(), vendor.to_string()),
        ("device.product.id".to_string(), product.to_string()),
        ("device.description".to_string(), desc.to_string()),
    ]);

    LiveSink {
        index,
        name: format!("sink.{vendor}.{product}"),
        description: desc.to_string(),
        properties,
    }
}

/// A call the code under test made against the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
    SetDefault(u32),
    Move { input: u32, sink: u32 },
}

/// In-memory audio server that records mutating calls
#[derive(Debug, Default)]
pub(crate) struct FakeServer {
    pub sinks: Vec<LiveSink>,
    pub inputs: Vec<SinkInput>,
    pub default_sink_name: String,
    pub calls: Vec<Call>,
    /// Fail the move of this sink input
    pub fail_move_of: Option<u32>,
}

impl FakeServer {
    pub fn with_sinks(sinks: Vec<LiveSink>) -> Self {
        Self {
            sinks,
            ..Self::default()
        }
    }

    /// Add active streams, all routed to `sink`
    pub fn with_streams(mut self, sink: u32, indices: &[u32]) -> Self {
        self.inputs
            .extend(indices.iter().map(|&index| SinkInput { index, sink }));
        self
    }
}

impl AudioServer for FakeServer {
    fn sinks(&mut self) -> Result<Vec<LiveSink>> {
        Ok(self.sinks.clone())
    }

    fn server_info(&mut self) -> Result<ServerInfo> {
        Ok(ServerInfo {
            default_sink_name: self.default_sink_name.clone(),
        })
    }

    fn sink_inputs(&mut self) -> Result<Vec<SinkInput>> {
        Ok(self.inputs.clone())
    }

    fn set_default_sink(&mut self, sink: &LiveSink) -> Result<()> {
        self.calls.push(Call::SetDefault(sink.index));
        self.default_sink_name.clone_from(&sink.name);
        Ok(())
    }

    fn move_sink_input(&mut self, input_index: u32, sink_index: u32) -> Result<()> {
        if self.fail_move_of == Some(input_index) {
            eyre::bail!("No such entity: sink input {input_index}");
        }
        self.calls.push(Call::Move {
            input: input_index,
            sink: sink_index,
        });
        Ok(())
    }
}
