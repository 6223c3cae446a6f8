//! Messages handed to the rendering collaborator.

use catan_boardgen::GeneratedBoard;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Messages written to stdout, one JSON document per line.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum RenderMessage {
    /// A finished board with its hex centers and ports
    Board { board: GeneratedBoard },
}

/// Serialize the board as a single JSON line.
pub fn write_board<W: Write>(generated: &GeneratedBoard, mut writer: W) -> anyhow::Result<()> {
    let msg = RenderMessage::Board {
        board: generated.clone(),
    };
    serde_json::to_writer(&mut writer, &msg)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catan_boardgen::{BoardGenerator, BoardVariant, PortMode};

    #[test]
    fn test_board_message_is_one_json_line() {
        let generated = BoardGenerator::new(BoardVariant::Standard)
            .with_port_mode(PortMode::Standard)
            .generate_seeded(1)
            .unwrap();

        let mut buf = Vec::new();
        write_board(&generated, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);

        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["type"], "Board");
        assert_eq!(value["payload"]["board"]["variant"], "standard");
        assert_eq!(value["payload"]["board"]["ports"].as_array().unwrap().len(), 9);
        assert_eq!(value["payload"]["board"]["centers"].as_array().unwrap().len(), 19);
    }

    #[test]
    fn test_board_message_round_trips() {
        let generated = BoardGenerator::new(BoardVariant::Extended)
            .generate_seeded(2)
            .unwrap();

        let mut buf = Vec::new();
        write_board(&generated, &mut buf).unwrap();
        let RenderMessage::Board { board } = serde_json::from_slice(&buf).unwrap();

        assert_eq!(board.board(), generated.board());
        assert_eq!(board.attempts(), generated.attempts());
    }
}
