use crate::server::{data::book::BookRepository, model::book::AddBookParam};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use std::collections::HashSet;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_id;
mod update_title;
