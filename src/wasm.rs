//! JavaScript bindings, enabled by the `wasm` feature.
//!
//! Boards cross the boundary as a flat row-major array of faces where `0` marks a cleared cell,
//! and paths come back as a flat [`Int32Array`] of `row, column` pairs.

use std::num::NonZero;

use js_sys::Int32Array;
use unordered_pair::UnorderedPair;
use wasm_bindgen::prelude::*;

use crate::board::Board;
use crate::builder::BoardBuilder;
use crate::path::Path;
use crate::position::{Coord, Position};

/// A board of numeric faces, owned on the Rust side.
#[wasm_bindgen]
pub struct WasmBoard {
    board: Board<u32>,
}

#[wasm_bindgen]
impl WasmBoard {
    /// Build a `height` by `width` board from `faces`, listed row by row. A face of `0` is an empty cell.
    #[wasm_bindgen(constructor)]
    pub fn new(height: usize, width: usize, faces: &[u32]) -> Result<WasmBoard, JsError> {
        let (Some(height), Some(width)) = (NonZero::new(height), NonZero::new(width)) else {
            return Err(JsError::new("board dimensions must be nonzero"));
        };
        if faces.len() != height.get() * width.get() {
            return Err(JsError::new("face count does not match board dimensions"));
        }

        let mut builder = BoardBuilder::with_dims((height, width));
        for (index, face) in faces.iter().enumerate().filter(|(_, face)| **face != 0) {
            builder.add_tile(*face, Position::from((index / width.get(), index % width.get())));
        }

        let board = builder.build()
            .map_err(|reasons| JsError::new(&format!("invalid board: {:?}", reasons)))?;
        Ok(WasmBoard { board })
    }

    /// Tiles still on the board.
    pub fn remaining(&self) -> usize {
        self.board.remaining()
    }

    /// The connector joining two tiles, or `undefined` if they cannot be matched.
    pub fn connect(&self, r1: i32, c1: i32, r2: i32, c2: i32) -> Option<Int32Array> {
        let a = Position(r1 as Coord, c1 as Coord);
        let b = Position(r2 as Coord, c2 as Coord);
        self.board.connect(a, b).ok().map(|path| flatten(&path))
    }

    /// The connector for the first matchable pair, or `undefined` when no pairs remain.
    pub fn hint(&self) -> Option<Int32Array> {
        self.board.hint().ok().map(|hint| flatten(&hint.path))
    }

    /// Take a matched pair off the board.
    pub fn remove(&mut self, r1: i32, c1: i32, r2: i32, c2: i32) -> Result<(), JsError> {
        let pair = UnorderedPair(Position(r1 as Coord, c1 as Coord), Position(r2 as Coord, c2 as Coord));
        self.board.remove_pair(pair).map_err(JsError::from)
    }
}

fn flatten(path: &Path) -> Int32Array {
    let coords = path.into_iter()
        .flat_map(|position| [position.0 as i32, position.1 as i32])
        .collect::<Vec<_>>();
    Int32Array::from(coords.as_slice())
}
