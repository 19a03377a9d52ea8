//! JSON request/response exchange for a single computer move
//!
//! Request:
//!
//! ```json
//! { "board": [[".", ".", "white", "black", ...], ...], "color": "black" }
//! ```
//!
//! Response: `{ "move": { "row": 2, "col": 3 } }`, or `{ "move": null }` when
//! the mover has no legal move.
//!
//! Malformed boards are rejected here so the engine only ever sees valid
//! positions. The difficulty is not part of the request; the host resolves
//! it from its own configuration.

use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell, Color, Pos, BOARD_SIZE};
use crate::engine::AIEngine;
use crate::error::ProtocolError;

/// Token for an empty cell
pub const EMPTY_TOKEN: &str = ".";

/// Incoming move request.
///
/// Cells may be `"."`, `""` or `null` for empty, otherwise a color token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub board: Vec<Vec<Option<String>>>,
    pub color: String,
}

/// Move coordinates on the wire, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveJson {
    pub row: u8,
    pub col: u8,
}

/// Outgoing response; `mv` is `null` for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub mv: Option<MoveJson>,
}

impl From<Pos> for MoveJson {
    fn from(pos: Pos) -> Self {
        Self {
            row: pos.row,
            col: pos.col,
        }
    }
}

impl From<Option<Pos>> for MoveResponse {
    fn from(pos: Option<Pos>) -> Self {
        Self {
            mv: pos.map(MoveJson::from),
        }
    }
}

/// Parse a color token (`black` / `white`, any case).
pub fn parse_color(token: &str) -> Result<Color, ProtocolError> {
    match token.trim().to_ascii_lowercase().as_str() {
        "black" => Ok(Color::Black),
        "white" => Ok(Color::White),
        _ => Err(ProtocolError::ColorToken(token.to_string())),
    }
}

fn parse_cell(token: Option<&str>) -> Option<Cell> {
    match token.map(str::trim) {
        None | Some("") | Some(EMPTY_TOKEN) => Some(Cell::Empty),
        Some(other) => parse_color(other).ok().map(Cell::from),
    }
}

impl MoveRequest {
    /// Build a request for `color` to move on `board`.
    pub fn from_position(board: &Board, color: Color) -> Self {
        let rows = board
            .rows()
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        Some(match cell.color() {
                            Some(c) => c.token().to_string(),
                            None => EMPTY_TOKEN.to_string(),
                        })
                    })
                    .collect()
            })
            .collect();
        Self {
            board: rows,
            color: color.token().to_string(),
        }
    }

    /// Decode and validate the board and mover.
    pub fn to_position(&self) -> Result<(Board, Color), ProtocolError> {
        if self.board.len() != BOARD_SIZE {
            return Err(ProtocolError::RowCount(self.board.len()));
        }

        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, tokens) in self.board.iter().enumerate() {
            if tokens.len() != BOARD_SIZE {
                return Err(ProtocolError::ColumnCount {
                    row,
                    len: tokens.len(),
                });
            }
            for (col, token) in tokens.iter().enumerate() {
                cells[row][col] =
                    parse_cell(token.as_deref()).ok_or_else(|| ProtocolError::CellToken {
                        row,
                        col,
                        token: token.clone().unwrap_or_default(),
                    })?;
            }
        }

        let color = parse_color(&self.color)?;
        Ok((Board::from_cells(cells), color))
    }
}

/// Decode a JSON request, run the engine, and build the response.
pub fn handle_request(json: &str, engine: &AIEngine) -> Result<MoveResponse, ProtocolError> {
    let request: MoveRequest = serde_json::from_str(json)?;
    let (board, color) = request.to_position()?;
    Ok(MoveResponse::from(engine.get_move(&board, color)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Difficulty;
    use serde_json::json;

    fn start_request(color: &str) -> serde_json::Value {
        let mut board = vec![vec!["."; 8]; 8];
        board[3][3] = "white";
        board[3][4] = "black";
        board[4][3] = "black";
        board[4][4] = "white";
        json!({ "board": board, "color": color })
    }

    #[test]
    fn test_decode_start_position() {
        let request: MoveRequest = serde_json::from_value(start_request("black")).unwrap();
        let (board, color) = request.to_position().unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(color, Color::Black);
    }

    #[test]
    fn test_position_round_trip() {
        let request = MoveRequest::from_position(&Board::new(), Color::White);
        assert_eq!(request.board[3][3].as_deref(), Some("white"));
        assert_eq!(request.board[0][0].as_deref(), Some("."));
        assert_eq!(request.to_position().unwrap(), (Board::new(), Color::White));
    }

    #[test]
    fn test_null_and_blank_cells_are_empty() {
        let mut value = start_request("white");
        value["board"][0][0] = serde_json::Value::Null;
        value["board"][0][1] = json!("");
        let request: MoveRequest = serde_json::from_value(value).unwrap();
        let (board, _) = request.to_position().unwrap();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reject_bad_shapes() {
        let mut value = start_request("black");
        value["board"].as_array_mut().unwrap().pop();
        let request: MoveRequest = serde_json::from_value(value).unwrap();
        assert!(matches!(request.to_position(), Err(ProtocolError::RowCount(7))));

        let mut value = start_request("black");
        value["board"][5].as_array_mut().unwrap().push(json!("."));
        let request: MoveRequest = serde_json::from_value(value).unwrap();
        assert!(matches!(
            request.to_position(),
            Err(ProtocolError::ColumnCount { row: 5, len: 9 })
        ));
    }

    #[test]
    fn test_reject_bad_tokens() {
        let mut value = start_request("black");
        value["board"][1][2] = json!("red");
        let request: MoveRequest = serde_json::from_value(value).unwrap();
        assert!(matches!(
            request.to_position(),
            Err(ProtocolError::CellToken { row: 1, col: 2, .. })
        ));

        let request: MoveRequest = serde_json::from_value(start_request("green")).unwrap();
        assert!(matches!(
            request.to_position(),
            Err(ProtocolError::ColorToken(_))
        ));
    }

    #[test]
    fn test_response_serialization() {
        let some = MoveResponse::from(Some(Pos::new(2, 3)));
        assert_eq!(
            serde_json::to_value(some).unwrap(),
            json!({ "move": { "row": 2, "col": 3 } })
        );

        let none = MoveResponse::from(None);
        assert_eq!(serde_json::to_value(none).unwrap(), json!({ "move": null }));
    }

    #[test]
    fn test_handle_request_opening() {
        let engine = AIEngine::with_difficulty(Difficulty::Easy);
        let response = handle_request(&start_request("black").to_string(), &engine).unwrap();

        let mv = response.mv.unwrap();
        let openings = [(2, 3), (3, 2), (4, 5), (5, 4)];
        assert!(openings.contains(&(mv.row, mv.col)));
    }

    #[test]
    fn test_handle_request_pass() {
        let mut board = vec![vec!["."; 8]; 8];
        board[0][0] = "white";
        board[0][1] = "black";
        let body = json!({ "board": board, "color": "black" }).to_string();

        let response = handle_request(&body, &AIEngine::new()).unwrap();
        assert_eq!(response.mv, None);
    }

    #[test]
    fn test_handle_request_malformed_json() {
        let err = handle_request("{ not json", &AIEngine::new()).unwrap_err();
        assert!(matches!(err, ProtocolError::Json(_)));
    }
}
