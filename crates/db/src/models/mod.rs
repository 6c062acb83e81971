pub mod cv;
pub mod document;
pub mod documentation;
pub mod education;
pub mod experience;
pub mod language;
