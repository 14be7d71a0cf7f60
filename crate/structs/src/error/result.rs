use super::StructsError;

pub type StructsResult<R> = Result<R, StructsError>;
