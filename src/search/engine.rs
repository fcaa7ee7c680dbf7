use super::types::{OrderBy, OrderField, SearchError, SearchRequest};
use crate::store::types::Record;

use std::cmp::Ordering;
use std::ops::Range;

/// Produces the page of `records` selected by `request`.
///
/// Records are filtered by `matches_query`, sorted when `order_by` is not `AsIs`,
/// then sliced by `page_range`. Nothing is mutated on failure.
///
/// `order_field` is validated even when `order_by` is `AsIs`, so an unknown field
/// fails the call whether or not a sort was asked for.
pub fn evaluate(records: &[Record], request: &SearchRequest) -> Result<Vec<Record>, SearchError> {
    let offset =
        usize::try_from(request.offset).map_err(|_| SearchError::BadOffset(request.offset))?;
    let limit = usize::try_from(request.limit).map_err(|_| SearchError::BadLimit(request.limit))?;
    let order_field: OrderField = request.order_field.parse()?;

    let mut matched: Vec<&Record> = records
        .iter()
        .filter(|record| matches_query(record, &request.query))
        .collect();

    sort_records(&mut matched, order_field, request.order_by);

    let range = page_range(matched.len(), offset, limit);
    Ok(matched[range].iter().copied().cloned().collect())
}

/// Case-sensitive substring match on `Name` or `About`. An empty query matches everything.
pub fn matches_query(record: &Record, query: &str) -> bool {
    query.is_empty() || record.name.contains(query) || record.about.contains(query)
}

/// Stable sort, so records with equal keys keep store order in both directions.
pub fn sort_records(records: &mut [&Record], field: OrderField, order_by: OrderBy) {
    match order_by {
        OrderBy::AsIs => {}
        OrderBy::Asc => records.sort_by(|a, b| compare(a, b, field)),
        OrderBy::Desc => records.sort_by(|a, b| compare(b, a, field)),
    }
}

fn compare(a: &Record, b: &Record, field: OrderField) -> Ordering {
    match field {
        OrderField::Id => a.id.cmp(&b.id),
        OrderField::Age => a.age.cmp(&b.age),
        OrderField::Name => a.name.cmp(&b.name),
    }
}

/// `offset..min(limit, len)`, collapsed to an empty range when `offset` is past the end.
///
/// `limit` bounds the end index, not the page length, so the page never holds more
/// than `limit` records.
pub fn page_range(len: usize, offset: usize, limit: usize) -> Range<usize> {
    let end = limit.min(len);
    offset.min(end)..end
}
