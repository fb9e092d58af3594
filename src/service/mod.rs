mod auction_service;

pub use auction_service::AuctionService;
