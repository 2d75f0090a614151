//! Sheet rows to club cards. One row per club: three club cells, then
//! one five-cell group per officer.
//!
//! Cell order follows the data-entry order of the site's sheet:
//! `club name, club image URL, club description`, then repeating
//! `name, image URL, role, contact type, contact content`.

use crate::domain::model::{BoardMember, ClubCard, Contact};
use crate::utils::error::{CardsError, Result};

const CLUB_CELLS: usize = 3;
const MEMBER_CELLS: usize = 5;

pub fn cards_from_rows(rows: &[Vec<String>]) -> Result<Vec<ClubCard>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| card_from_row(index, row))
        .collect()
}

fn card_from_row(index: usize, row: &[String]) -> Result<ClubCard> {
    if row.len() < CLUB_CELLS {
        return Err(CardsError::MalformedRow {
            row: index,
            reason: format!(
                "expected at least {} cells (name, image URL, description), got {}",
                CLUB_CELLS,
                row.len()
            ),
        });
    }

    let members = row[CLUB_CELLS..]
        .chunks(MEMBER_CELLS)
        .map(|group| member_from_cells(index, group))
        .collect::<Result<Vec<_>>>()?;

    Ok(ClubCard::new(
        row[0].clone(),
        row[1].clone(),
        row[2].clone(),
        members,
    ))
}

fn member_from_cells(index: usize, cells: &[String]) -> Result<BoardMember> {
    if cells.len() < MEMBER_CELLS {
        return Err(CardsError::MalformedRow {
            row: index,
            reason: format!(
                "trailing officer group has {} cells, expected {} \
                 (name, image URL, role, contact type, contact content)",
                cells.len(),
                MEMBER_CELLS
            ),
        });
    }

    let contact = Contact::parse(&cells[3], cells[4].clone())?;
    Ok(BoardMember::new(
        cells[0].clone(),
        cells[1].clone(),
        cells[2].clone(),
        contact,
    ))
}
