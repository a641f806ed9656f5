pub mod accountapp;
pub mod postsapp;
