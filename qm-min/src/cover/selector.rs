// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{
    cover::Cover,
    errors::UnsatisfiableCover,
    implicant::Implicant,
    primes::PrimeImplicants,
    term_set::Point,
};
use bitvec::prelude::*;
use itertools::Itertools;
use log::{debug, trace};
use std::collections::BTreeSet;

/// The result of choosing a minimal cover out of a set of prime implicants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverSelection {
    cover: Cover,
    essentials: Vec<Implicant>,
}

impl CoverSelection {
    /// Selects a minimum-cost cover of `target` from `primes`.
    ///
    /// Essential prime implicants are taken first. Points they leave uncovered are covered by
    /// solving Petrick's covering problem over the remaining primes exactly. Among the cheapest products the one with the
    /// fewest implicants wins, and after that the one whose prime indexes compare smallest, so the
    /// result is the same on every run.
    pub fn select(
        primes: &PrimeImplicants,
        target: &BitSlice,
    ) -> Result<Self, UnsatisfiableCover> {
        let variable_count = primes.variable_count();

        let mut essential_ixs = BTreeSet::new();
        for point in target.iter_ones() {
            if let Ok(ix) = primes.covering(point as Point).exactly_one() {
                essential_ixs.insert(ix);
            }
        }

        let mut remaining = target.to_bitvec();
        for &ix in &essential_ixs {
            for point in primes.elements()[ix].covered().iter_ones() {
                remaining.set(point, false);
            }
        }

        debug!(
            "{} of {} prime implicants are essential, {} points left to cover",
            essential_ixs.len(),
            primes.len(),
            remaining.count_ones()
        );

        let chosen = if remaining.any() {
            let candidates: Vec<usize> = (0..primes.len())
                .filter(|ix| !essential_ixs.contains(ix))
                .collect();
            cover_residual(primes, &candidates, &remaining)?
        } else {
            BTreeSet::new()
        };

        let essentials: Vec<Implicant> = essential_ixs
            .iter()
            .map(|&ix| primes.elements()[ix].implicant().clone())
            .collect();
        let cover = Cover::new(
            variable_count,
            essential_ixs
                .iter()
                .chain(&chosen)
                .map(|&ix| primes.elements()[ix].implicant().clone()),
        );

        Ok(Self { cover, essentials })
    }

    #[inline]
    pub fn cover(&self) -> &Cover {
        &self.cover
    }

    #[inline]
    pub fn into_cover(self) -> Cover {
        self.cover
    }

    /// The essential prime implicants, in prime order. All of them are part of the cover.
    #[inline]
    pub fn essentials(&self) -> &[Implicant] {
        &self.essentials
    }
}

/// A set of chosen primes, as prime indexes.
type Product = BTreeSet<usize>;

/// Chooses the best set of non-essential primes covering `remaining`.
///
/// Petrick's product of sums (for each remaining point, one of the primes covering it) is
/// minimized by branch and bound over a reduced covering table rather than by expanding it.
fn cover_residual(
    primes: &PrimeImplicants,
    candidates: &[usize],
    remaining: &BitSlice,
) -> Result<Product, UnsatisfiableCover> {
    let table = CoverTable::new(primes, candidates, remaining)?.reduce();
    debug!(
        "covering table: {} rows, {} columns after reduction",
        table.rows.len(),
        table.columns.len()
    );

    let mut search = Search::new(table);
    let uncovered = bitvec![1; search.table.rows.len()];
    let excluded = bitvec![0; search.table.columns.len()];
    search.run(&uncovered, &excluded, &mut Vec::new(), 0);
    debug!("branch and bound visited {} nodes", search.nodes);

    search.best.map(|(_, _, product)| product).ok_or(UnsatisfiableCover {
        point: remaining.first_one().unwrap_or(0) as Point,
    })
}

#[derive(Clone, Debug)]
struct Column {
    prime: usize,
    cost: usize,
    /// Rows (indexes into `CoverTable::rows`) this prime covers.
    rows: BitVec,
}

/// Rows are points still to cover, columns are the primes that may cover them.
#[derive(Clone, Debug)]
struct CoverTable {
    rows: Vec<Point>,
    columns: Vec<Column>,
}

impl CoverTable {
    fn new(
        primes: &PrimeImplicants,
        candidates: &[usize],
        remaining: &BitSlice,
    ) -> Result<Self, UnsatisfiableCover> {
        let rows: Vec<Point> = remaining.iter_ones().map(|point| point as Point).collect();
        let columns: Vec<Column> = candidates
            .iter()
            .map(|&prime| {
                let element = &primes.elements()[prime];
                Column {
                    prime,
                    cost: element.implicant().literal_count(),
                    rows: rows.iter().map(|&point| element.covers(point)).collect(),
                }
            })
            .collect();

        for (row, &point) in rows.iter().enumerate() {
            if !columns.iter().any(|column| column.rows[row]) {
                return Err(UnsatisfiableCover { point });
            }
        }
        Ok(Self { rows, columns })
    }

    /// Drops columns and rows that cannot change the best cover.
    ///
    /// A column whose rows are all covered by a strictly cheaper column never appears in a best
    /// cover. A row whose columns include all columns of another row is covered whenever the
    /// other row is.
    fn reduce(self) -> Self {
        let Self { rows, columns } = self;

        let dominated = |ix: usize| {
            let column = &columns[ix];
            columns.iter().any(|other| {
                other.cost < column.cost && column.rows.iter_ones().all(|row| other.rows[row])
            })
        };
        let columns: Vec<Column> = (0..columns.len())
            .filter(|&ix| !dominated(ix))
            .map(|ix| columns[ix].clone())
            .collect();

        let row_columns: Vec<BitVec> = (0..rows.len())
            .map(|row| columns.iter().map(|column| column.rows[row]).collect())
            .collect();
        let is_subset = |a: &BitVec, b: &BitVec| a.iter_ones().all(|ix| b[ix]);
        let kept_rows: Vec<usize> = (0..rows.len())
            .filter(|&row| {
                !(0..rows.len()).any(|other| {
                    other != row
                        && is_subset(&row_columns[other], &row_columns[row])
                        && (row_columns[other] != row_columns[row] || other < row)
                })
            })
            .collect();

        let columns = columns
            .into_iter()
            .map(|column| Column {
                rows: kept_rows.iter().map(|&row| column.rows[row]).collect(),
                ..column
            })
            .collect();
        let rows = kept_rows.iter().map(|&row| rows[row]).collect();
        Self { rows, columns }
    }
}

/// Depth-first branch and bound over a covering table.
///
/// Each node branches on the uncovered row with the fewest available columns. Branch `i` takes
/// that row's `i`th column and excludes the ones before it, so every column set is visited at most
/// once. A node is pruned when a lower bound on its `(cost, count)` exceeds the best found so far;
/// ties are explored so the index order decides between equally cheap covers.
struct Search {
    table: CoverTable,
    /// For each row, the columns covering it, cheapest first.
    row_columns: Vec<Vec<usize>>,
    best: Option<(usize, usize, Product)>,
    nodes: usize,
}

impl Search {
    fn new(table: CoverTable) -> Self {
        let row_columns: Vec<Vec<usize>> = (0..table.rows.len())
            .map(|row| {
                (0..table.columns.len())
                    .filter(|&ix| table.columns[ix].rows[row])
                    .sorted_by_key(|&ix| (table.columns[ix].cost, table.columns[ix].prime))
                    .collect()
            })
            .collect();
        Self {
            table,
            row_columns,
            best: None,
            nodes: 0,
        }
    }

    fn available<'a>(
        &'a self,
        row: usize,
        excluded: &'a BitSlice,
    ) -> impl Iterator<Item = usize> + 'a {
        self.row_columns[row]
            .iter()
            .copied()
            .filter(move |&ix| !excluded[ix])
    }

    fn run(
        &mut self,
        uncovered: &BitSlice,
        excluded: &BitSlice,
        chosen: &mut Vec<usize>,
        cost: usize,
    ) {
        self.nodes += 1;

        if uncovered.not_any() {
            let product: Product = chosen
                .iter()
                .map(|&ix| self.table.columns[ix].prime)
                .collect();
            let key = (cost, chosen.len(), product);
            if self.best.as_ref().map_or(true, |best| key < *best) {
                trace!("new best cover: cost {}, primes {:?}", key.0, key.2);
                self.best = Some(key);
            }
            return;
        }

        let (bound_cost, bound_count) = match self.lower_bound(uncovered, excluded) {
            Some(bound) => bound,
            None => return,
        };
        if let Some((best_cost, best_count, _)) = &self.best {
            if (cost + bound_cost, chosen.len() + bound_count) > (*best_cost, *best_count) {
                return;
            }
        }

        let row = uncovered
            .iter_ones()
            .min_by_key(|&row| self.available(row, excluded).count())
            .expect("some row is uncovered");
        let branches: Vec<usize> = self.available(row, excluded).collect();

        let mut excluded = excluded.to_bitvec();
        for ix in branches {
            let mut next = uncovered.to_bitvec();
            for covered in self.table.columns[ix].rows.iter_ones() {
                next.set(covered, false);
            }
            let column_cost = self.table.columns[ix].cost;

            chosen.push(ix);
            self.run(&next, &excluded, chosen, cost + column_cost);
            chosen.pop();
            excluded.set(ix, true);
        }
    }

    /// A lower bound on the `(cost, count)` still needed, or `None` if some row can no longer be
    /// covered.
    ///
    /// Rows that share no available column need distinct columns, so the cheapest column of each
    /// row in such a set adds up to a bound.
    fn lower_bound(&self, uncovered: &BitSlice, excluded: &BitSlice) -> Option<(usize, usize)> {
        let mut rows: Vec<(usize, usize)> = uncovered
            .iter_ones()
            .map(|row| (self.available(row, excluded).count(), row))
            .collect();
        if rows.iter().any(|&(available, _)| available == 0) {
            return None;
        }
        rows.sort_unstable();

        let mut blocked = bitvec![0; self.table.columns.len()];
        let (mut cost, mut count) = (0, 0);
        for (_, row) in rows {
            if self.available(row, excluded).any(|ix| blocked[ix]) {
                continue;
            }
            cost += self
                .available(row, excluded)
                .map(|ix| self.table.columns[ix].cost)
                .min()
                .unwrap_or(0);
            count += 1;
            for ix in self.available(row, excluded) {
                blocked.set(ix, true);
            }
        }
        Some((cost, count))
    }
}
