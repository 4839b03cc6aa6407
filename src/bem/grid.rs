//! Grid rule
//!
//! In a `grid` with `mods.m-columns = N`, fractions holding marketing
//! blocks may take at most half of the N columns.

use crate::bem::codes;
use crate::bem::entity::Entity;
use crate::validation::supplemental::LintProblem;

const MARKETING_BLOCKS: [&str; 2] = ["commercial", "offer"];

fn is_marketing(fraction: &Entity<'_>) -> bool {
    fraction
        .descendants()
        .iter()
        .any(|e| e.elem.is_none() && MARKETING_BLOCKS.contains(&e.block))
}

pub fn check(grid: &Entity<'_>, problems: &mut Vec<LintProblem>) {
    let Some(columns) = grid
        .modifier("m-columns")
        .and_then(|c| c.trim().parse::<u64>().ok())
    else {
        return;
    };

    let marketing_columns = grid
        .children()
        .iter()
        .filter(|child| child.is_elem("grid", "fraction") && is_marketing(child))
        .filter_map(|fraction| fraction.elem_modifier("m-col")?.trim().parse::<u64>().ok())
        .fold(0u64, u64::saturating_add);

    // Exactly half is still allowed
    if marketing_columns > columns / 2 {
        problems.push(LintProblem::new(
            codes::TOO_MUCH_MARKETING_BLOCKS,
            format!(
                "Marketing blocks take {} of {} grid columns, at most half is allowed",
                marketing_columns, columns
            ),
            grid.location(),
        ));
    }
}
