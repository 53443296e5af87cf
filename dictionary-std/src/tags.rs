//! Named constants for the tags covered by [`ENTRIES`](crate::entries::ENTRIES)
//! plus the DIMSE command-group fields, so that call sites can write
//! `tags::PATIENT_NAME` instead of spelling out `Tag(0x0010, 0x0010)`.
//!
//! This mirrors the generated `tags` module of the full PS3.6 registry,
//! trimmed down to the attributes this workspace actually refers to by
//! name.

use dicom_core::header::Tag;

// DIMSE command group (0000,xxxx), used by the command-set builders.
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);
pub const PRIORITY: Tag = Tag(0x0000, 0x0700);
pub const COMMAND_DATA_SET_TYPE: Tag = Tag(0x0000, 0x0800);
pub const AFFECTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1000);

// File Meta Information group (0002,xxxx).
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);

// Identification and description.
pub const CODE_VALUE: Tag = Tag(0x0008, 0x0100);
pub const CODING_SCHEME_DESIGNATOR: Tag = Tag(0x0008, 0x0102);
pub const CODE_MEANING: Tag = Tag(0x0008, 0x0104);
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
pub const ANATOMIC_REGION_SEQUENCE: Tag = Tag(0x0008, 0x2218);
pub const ANATOMIC_REGION_MODIFIER_SEQUENCE: Tag = Tag(0x0008, 0x2220);

// Patient module.
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
pub const PATIENT_ADDRESS: Tag = Tag(0x0010, 0x1040);

// Request / procedure.
pub const REQUESTING_PHYSICIAN: Tag = Tag(0x0032, 0x1032);

// Study / series / instance identification.
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);

// Image pixel module.
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
pub const ROWS: Tag = Tag(0x0028, 0x0010);
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
pub const BURNED_IN_ANNOTATION: Tag = Tag(0x0028, 0x0301);
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
pub const LOSSY_IMAGE_COMPRESSION_METHOD: Tag = Tag(0x0028, 0x2114);

// Pixel data.
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);
