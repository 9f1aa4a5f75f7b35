use crate::data::antinuke::offense::AntinukeOffenseRepository;
use chrono::Utc;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod increment;
