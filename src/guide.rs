//! The downloadable security guide: a fixed text document, independent of
//! anything shown on the page.

pub const GUIDE_FILENAME: &str = "nft-metadata-security-guide.txt";

pub const GUIDE_CONTENT: &str = "\
NFT Metadata Security Guide

1. Understanding NFT Metadata
- Metadata includes images, attributes, and links
- Can be stored on-chain or off-chain
- Immutability depends on storage method

2. Storage Types
Immutable Storage:
- On-chain metadata storage
- Decentralized storage (IPFS with pinning)
- Permanent and verifiable
- Higher gas costs

Mutable Storage:
- Centralized servers
- Unpinned IPFS content
- Can be modified or deleted
- Lower initial costs

3. Best Practices
- Always verify smart contract code
- Check metadata storage location
- Use NFT verification tools
- Prefer on-chain metadata when possible
- Verify IPFS content is properly pinned

4. Red Flags
- Unclear metadata storage methods
- Unpinned IPFS content
- Centralized storage without backups
- Missing smart contract verification

For more information, visit: https://ethereum.org/en/nft/
";
