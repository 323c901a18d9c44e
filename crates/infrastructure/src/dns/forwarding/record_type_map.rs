//! Mapping between `digsip_domain::RecordType` and `hickory_proto::rr::RecordType`.

use digsip_domain::RecordType;
use hickory_proto::rr::RecordType as HickoryRecordType;

pub struct RecordTypeMapper;

impl RecordTypeMapper {
    pub fn to_hickory(record_type: &RecordType) -> HickoryRecordType {
        match record_type {
            RecordType::A => HickoryRecordType::A,
            RecordType::SRV => HickoryRecordType::SRV,
            RecordType::NAPTR => HickoryRecordType::NAPTR,
        }
    }

    /// Returns `None` for types the resolution chain never asks for.
    pub fn from_hickory(hickory_type: HickoryRecordType) -> Option<RecordType> {
        match hickory_type {
            HickoryRecordType::A => Some(RecordType::A),
            HickoryRecordType::SRV => Some(RecordType::SRV),
            HickoryRecordType::NAPTR => Some(RecordType::NAPTR),
            _ => None,
        }
    }
}
