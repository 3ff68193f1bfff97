pub const DEFAULT_INPUT_FILE_NAME: &str = "users.json";
pub const DEFAULT_OUTPUT_FILE_NAME: &str = "SmartGridMappingGenerated.sol";

pub const SPDX_LICENSE_IDENTIFIER: &str = "MIT";
pub const SOLIDITY_VERSION_PRAGMA: &str = "^0.8.0";
pub const CONTRACT_NAME: &str = "SmartGridMapping";

/// Indentation of a statement inside the generated constructor body.
pub const STATEMENT_INDENT: &str = "        ";

/// Largest value of the declared `uint` type, meaning "not matched yet".
///
/// This is a Solidity expression and must stay in sync with the type of
/// `matchedWith` in the generated struct.
pub const MATCHED_WITH_SENTINEL: &str = "type(uint).max";
pub const MATCHED_DEFAULT: &str = "false";
