//! ERC-20 bindings used for allowance reads and approval call data

use alloy_sol_types::sol;

sol! {
	#[allow(missing_docs)]
	#[derive(Debug)]
	#[sol(rpc)]
	interface IERC20 {
		function allowance(address owner, address spender) external view returns (uint256);
		function approve(address spender, uint256 amount) external returns (bool);
	}
}
