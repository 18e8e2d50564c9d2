// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::str::FromStr;

use clap::Parser;
use itertools::Itertools;
use tracing::info;
use tracing_subscriber::EnvFilter;

use planar::matrix::{InitPolicy, Matrix2D};
use planar::shape::{Position, Shape};

/// Build a matrix, paste constant blocks into it, and print the result
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of columns
    #[arg(long, default_value_t = 5)]
    width: usize,

    /// Number of rows
    #[arg(long, default_value_t = 5)]
    height: usize,

    /// Initial value of every cell
    #[arg(long, default_value_t = 0.0)]
    fill: f64,

    /// Paste a constant block, as ROW,COLUMN,HEIGHT,WIDTH,VALUE. May be repeated
    #[arg(long)]
    paste: Vec<Paste>,

    /// Print only the inclusive region FIRST_COLUMN,LAST_COLUMN,FIRST_ROW,LAST_ROW
    #[arg(long)]
    slice: Option<Region>,
}

#[derive(Clone, Debug)]
struct Paste {
    at: Position,
    shape: Shape,
    value: f64,
}

impl FromStr for Paste {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, column, height, width, value) = s
            .split(',')
            .map(str::trim)
            .collect_tuple()
            .ok_or_else(|| format!("expected ROW,COLUMN,HEIGHT,WIDTH,VALUE, got `{s}`"))?;
        let int = |v: &str| v.parse::<isize>().map_err(|e| format!("`{v}`: {e}"));
        let size = |v: &str| v.parse::<usize>().map_err(|e| format!("`{v}`: {e}"));

        Ok(Paste {
            at: Position::new(int(row)?, int(column)?),
            shape: Shape::new(size(width)?, size(height)?),
            value: value.parse().map_err(|e| format!("`{value}`: {e}"))?,
        })
    }
}

#[derive(Clone, Debug)]
struct Region {
    columns: (isize, isize),
    rows: (isize, isize),
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bounds: Vec<isize> = s
            .split(',')
            .map(|v| v.trim().parse().map_err(|e| format!("`{v}`: {e}")))
            .collect::<Result<_, _>>()?;
        match bounds[..] {
            [c0, c1, r0, r1] => Ok(Region {
                columns: (c0, c1),
                rows: (r0, r1),
            }),
            _ => Err(format!("expected FIRST_COLUMN,LAST_COLUMN,FIRST_ROW,LAST_ROW, got `{s}`")),
        }
    }
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let shape = Shape::new(args.width, args.height);
    let mut matrix = Matrix2D::new(shape, [InitPolicy::Constant(args.fill)])?;

    for paste in &args.paste {
        let block = Matrix2D::new(paste.shape, [InitPolicy::Constant(paste.value)])?;
        matrix.update(paste.at, &block)?;
        info!(at = %paste.at, shape = %paste.shape, "pasted block");
    }

    let matrix = match args.slice {
        Some(Region { columns, rows }) => matrix.slice(columns.0..=columns.1, rows.0..=rows.1)?,
        None => matrix,
    };
    println!("{matrix}");
    Ok(())
}
