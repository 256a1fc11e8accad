pub(crate) mod admin;
pub(crate) mod matches;
pub(crate) mod rating_list;
