//! # Key Capabilities
//!
//! Small traits each record variant implements for the key schemes it
//! takes part in. The default methods hold the key formats; variants only
//! expose the attributes the formats need.

use super::composer::*;
use super::index::KeyPair;
use crate::domain::errors::KeyDerivationError;
use crate::domain::identifiers::{CustomerId, Owner, SortableIdentifier};
use crate::domain::record::RecordType;

/// Every record has a type and exactly one identifier.
pub trait Keyed {
    fn record_type(&self) -> RecordType;

    fn identifier(&self) -> &SortableIdentifier;

    /// `Type:Identifier`.
    fn type_identifier_key(&self) -> String {
        type_identifier_key(self.record_type(), self.identifier())
    }
}

/// Variants whose primary key is partitioned by customer and owner.
pub trait OwnerScoped: Keyed {
    fn customer_id(&self) -> Option<&CustomerId>;

    fn owner(&self) -> Option<&Owner>;

    /// `PK = Type:CustomerIdentifier:Owner`, `SK = Type:Identifier`.
    fn owner_primary_key(&self) -> Result<KeyPair, KeyDerivationError> {
        let partition_key = owner_partition_key(self.record_type(), self.customer_id(), self.owner())?;
        Ok(KeyPair::new(partition_key, self.type_identifier_key()))
    }
}

/// Variants listed by status within a customer.
pub trait WithStatus: OwnerScoped {
    /// Status as written into the index key.
    fn status(&self) -> &'static str;

    /// `PK = Type:Customer:CustomerIdentifier:Status:Status`, `SK = Type:Identifier`.
    fn by_type_customer_status_key(&self) -> Result<KeyPair, KeyDerivationError> {
        let partition_key = status_partition_key(self.record_type(), self.customer_id(), self.status())?;
        Ok(KeyPair::new(partition_key, self.type_identifier_key()))
    }
}

/// Variants returned by "all records attached to resource X" queries.
pub trait JoinWithResource: Keyed {
    fn join_customer_id(&self) -> Option<&CustomerId>;

    fn resource_identifier(&self) -> &SortableIdentifier;

    /// `PK = Customer:CustomerIdentifier:Resource:ResourceIdentifier`,
    /// `SK = OrderPrefix:Type:Identifier`.
    fn by_customer_resource_key(&self) -> Result<KeyPair, KeyDerivationError> {
        let partition_key = resource_partition_key(
            self.record_type(),
            self.join_customer_id(),
            self.resource_identifier(),
        )?;
        let sort_key = resource_sort_key(self.record_type(), self.identifier())?;
        Ok(KeyPair::new(partition_key, sort_key))
    }
}

/// Variants fetched by identifier rather than by owner.
///
/// For these variants the primary key pair equals this pair.
pub trait IdentifiedByType: Keyed {
    /// `PK = SK = Type:Identifier` unless the variant pairs two entities.
    fn by_type_and_identifier_key(&self) -> Result<KeyPair, KeyDerivationError> {
        let key = self.type_identifier_key();
        Ok(KeyPair::new(key.clone(), key))
    }
}
