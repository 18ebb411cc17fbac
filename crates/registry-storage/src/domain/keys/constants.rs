//! # Key Constants
//!
//! Attribute names and key fragments shared by every record variant.
//!
//! Changing any value here changes the stored key format and breaks reads
//! of existing tables.

/// Separator between key fields: `Type:Customer:Owner`.
pub const KEY_FIELDS_DELIMITER: char = ':';

/// Maximal printable ASCII character, used to pad range upper bounds.
pub const MAX_PRINTABLE_ASCII: char = '~';

/// Field prefix before the customer identifier in index partition keys.
pub const CUSTOMER_INDEX_FIELD_PREFIX: &str = "Customer";

/// Field prefix before the status value in the status index.
pub const STATUS_INDEX_FIELD_PREFIX: &str = "Status";

/// Field prefix before the resource identifier in join and pairing keys.
pub const RESOURCE_INDEX_FIELD_PREFIX: &str = "Resource";

/// Type discriminant attribute.
pub const TYPE_ATTRIBUTE: &str = "type";

/// Reserved payload attribute (compressed blob or legacy map).
pub const DATA_ATTRIBUTE: &str = "data";

/// Opaque version attribute.
pub const VERSION_ATTRIBUTE: &str = "version";

/// Primary key attributes.
pub const PRIMARY_KEY_PARTITION_KEY_NAME: &str = "PK0";
pub const PRIMARY_KEY_SORT_KEY_NAME: &str = "SK0";

/// ByTypeCustomerStatus index.
pub const BY_TYPE_CUSTOMER_STATUS_INDEX_NAME: &str = "ByTypeCustomerStatus";
pub const BY_TYPE_CUSTOMER_STATUS_PARTITION_KEY_NAME: &str = "PK1";
pub const BY_TYPE_CUSTOMER_STATUS_SORT_KEY_NAME: &str = "SK1";

/// ByTypeAndIdentifier index.
pub const BY_TYPE_AND_IDENTIFIER_INDEX_NAME: &str = "ByTypeAndIdentifier";
pub const BY_TYPE_AND_IDENTIFIER_PARTITION_KEY_NAME: &str = "PK2";
pub const BY_TYPE_AND_IDENTIFIER_SORT_KEY_NAME: &str = "SK2";

/// ByCustomerResource ("join") index.
pub const BY_CUSTOMER_RESOURCE_INDEX_NAME: &str = "ByCustomerResource";
pub const BY_CUSTOMER_RESOURCE_PARTITION_KEY_NAME: &str = "PK3";
pub const BY_CUSTOMER_RESOURCE_SORT_KEY_NAME: &str = "SK3";

/// Every attribute the key composer owns. None of them is ever read back
/// into a record.
pub const DERIVED_KEY_ATTRIBUTES: [&str; 8] = [
    PRIMARY_KEY_PARTITION_KEY_NAME,
    PRIMARY_KEY_SORT_KEY_NAME,
    BY_TYPE_CUSTOMER_STATUS_PARTITION_KEY_NAME,
    BY_TYPE_CUSTOMER_STATUS_SORT_KEY_NAME,
    BY_TYPE_AND_IDENTIFIER_PARTITION_KEY_NAME,
    BY_TYPE_AND_IDENTIFIER_SORT_KEY_NAME,
    BY_CUSTOMER_RESOURCE_PARTITION_KEY_NAME,
    BY_CUSTOMER_RESOURCE_SORT_KEY_NAME,
];
