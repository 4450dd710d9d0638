mod class_list;
mod label_target;

pub use class_list::ClassList;
pub use label_target::LabelTarget;
